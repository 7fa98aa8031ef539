use anyhow::Result;
use gallery_manager::{
    load_all, Exhibition, ExhibitionKind, ExhibitionStore, Gallery, GalleryError, JsonFileStore,
    Menu, Pricing, Sellable,
};
use std::io::Cursor;
use tempfile::TempDir;

const CURRENT_YEAR: i32 = 2026;

#[test]
fn test_creation_prices_ten_years_back() {
    let pricing = Pricing::default();
    let year = CURRENT_YEAR - 10;

    let painting = pricing.create(ExhibitionKind::Painting, "P", "A", year, CURRENT_YEAR);
    let sculpture = pricing.create(ExhibitionKind::Sculpture, "S", "A", year, CURRENT_YEAR);

    assert_eq!(painting.price(), 1500.0);
    assert_eq!(sculpture.price(), 1300.0);
}

#[test]
fn test_full_cycle_with_fresh_instances() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("exhibitions.json");

    // 空的儲存區
    let (mut gallery, warning) = Gallery::open(JsonFileStore::new(&path));
    assert!(warning.is_none());
    assert!(gallery.is_empty());

    let starry_night =
        Pricing::default().create(ExhibitionKind::Painting, "Starry Night", "Vincent", 1889, CURRENT_YEAR);
    assert_eq!(starry_night.price(), 1000.0 + 137.0 * 50.0);
    gallery.add(starry_night.clone()).persisted?;
    drop(gallery);

    let (mut gallery, warning) = Gallery::open(JsonFileStore::new(&path));
    assert!(warning.is_none());
    assert_eq!(gallery.len(), 1);
    let reloaded = gallery.get(1)?;
    assert_eq!(reloaded.kind(), ExhibitionKind::Painting);
    assert_eq!(reloaded, &starry_night);

    // 賣出後由呼叫端負責刪除
    let narrative = gallery.get(1)?.sell(Some(2000.0));
    assert_eq!(narrative, "Painting \"Starry Night\" sold for $2,000.00.");
    assert_eq!(gallery.len(), 1);

    gallery.delete(1)?.persisted?;
    drop(gallery);

    assert!(load_all(&path)?.is_empty());
    let (gallery, _) = Gallery::open(JsonFileStore::new(&path));
    assert!(gallery.is_empty());
    Ok(())
}

#[test]
fn test_gallery_sell_persists_removal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("exhibitions.json");

    let store = JsonFileStore::new(&path);
    let mut gallery = Gallery::with_exhibitions(
        store,
        vec![
            Exhibition::painting("A", "X", 1900, 7300.0),
            Exhibition::sculpture("B", "Y", 1950, 3280.0),
        ],
    );

    let sale = gallery.sell(1, None)?;
    assert!(sale.is_persisted());
    assert_eq!(sale.outcome.final_price, 7300.0);

    assert_eq!(
        load_all(&path)?,
        vec![Exhibition::sculpture("B", "Y", 1950, 3280.0)]
    );
    Ok(())
}

#[test]
fn test_corrupt_file_opens_empty_with_warning() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("exhibitions.json");
    std::fs::write(&path, "<ArrayOfExhibition/>")?;

    let (mut gallery, warning) = Gallery::open(JsonFileStore::new(&path));
    assert!(matches!(warning, Some(GalleryError::LoadError { .. })));
    assert!(gallery.is_empty());

    // 下一次修改會覆寫損壞的檔案
    gallery
        .add(Exhibition::sculpture("B", "Y", 1950, 3280.0))
        .persisted?;
    assert_eq!(load_all(&path)?.len(), 1);
    Ok(())
}

#[test]
fn test_save_failure_is_reported_not_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    // 以目錄作為資料檔路徑，寫入必定失敗
    let store = JsonFileStore::new(temp_dir.path());
    let mut gallery = Gallery::with_exhibitions(store, Vec::new());

    let applied = gallery.add(Exhibition::painting("A", "X", 1900, 7300.0));
    assert_eq!(applied.outcome, 1);
    assert!(matches!(
        applied.persisted,
        Err(GalleryError::SaveError { .. })
    ));
    assert_eq!(gallery.len(), 1);
    Ok(())
}

#[test]
fn test_menu_session_is_persisted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("exhibitions.json");

    // 新增一幅畫、一座雕塑，賣出畫作，然後離開
    let script = "1\nStarry Night\nVincent\n1889\n1\n1\n\
                  1\nThe Thinker\nRodin\n1904\n2\n1\n\
                  3\n1\n2\n2000\n\
                  5\n";

    let (gallery, _) = Gallery::open(JsonFileStore::new(&path));
    let mut menu = Menu::new(
        gallery,
        Pricing::default(),
        CURRENT_YEAR,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    menu.run()?;
    assert_eq!(menu.gallery().len(), 1);

    let (_, output) = menu.into_parts();
    let output = String::from_utf8(output)?;
    assert!(output.contains("Painting \"Starry Night\" sold for $2,000.00."));

    let stored = JsonFileStore::new(&path).load_all()?;
    assert_eq!(
        stored,
        vec![Exhibition::sculpture(
            "The Thinker",
            "Rodin",
            1904,
            1000.0 + 122.0 * 30.0
        )]
    );
    Ok(())
}
