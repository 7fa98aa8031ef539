use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields shared by every exhibition variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub price: f64,
}

impl Artwork {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, year: i32, price: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            year,
            price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExhibitionKind {
    Painting,
    Sculpture,
}

impl ExhibitionKind {
    pub fn label(self) -> &'static str {
        match self {
            ExhibitionKind::Painting => "Painting",
            ExhibitionKind::Sculpture => "Sculpture",
        }
    }

    /// Plural noun used in visit narration ("exhibition of paintings").
    pub fn category(self) -> &'static str {
        match self {
            ExhibitionKind::Painting => "paintings",
            ExhibitionKind::Sculpture => "sculptures",
        }
    }
}

impl fmt::Display for ExhibitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An artwork on show. The serde tag is the on-disk discriminator, so it is
/// always derived from the variant and never stored separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Exhibition {
    Painting(Artwork),
    Sculpture(Artwork),
}

pub trait Visitable {
    fn visit(&self) -> String;
}

pub trait Sellable {
    /// Price the sale would close at. A custom price only applies when it is
    /// strictly positive.
    fn final_price(&self, custom_price: Option<f64>) -> f64;

    /// Sale narration. Does not remove or modify the record.
    fn sell(&self, custom_price: Option<f64>) -> String;
}

impl Exhibition {
    pub fn new(kind: ExhibitionKind, artwork: Artwork) -> Self {
        match kind {
            ExhibitionKind::Painting => Exhibition::Painting(artwork),
            ExhibitionKind::Sculpture => Exhibition::Sculpture(artwork),
        }
    }

    pub fn painting(title: impl Into<String>, artist: impl Into<String>, year: i32, price: f64) -> Self {
        Exhibition::Painting(Artwork::new(title, artist, year, price))
    }

    pub fn sculpture(title: impl Into<String>, artist: impl Into<String>, year: i32, price: f64) -> Self {
        Exhibition::Sculpture(Artwork::new(title, artist, year, price))
    }

    pub fn kind(&self) -> ExhibitionKind {
        match self {
            Exhibition::Painting(_) => ExhibitionKind::Painting,
            Exhibition::Sculpture(_) => ExhibitionKind::Sculpture,
        }
    }

    pub fn artwork(&self) -> &Artwork {
        match self {
            Exhibition::Painting(artwork) | Exhibition::Sculpture(artwork) => artwork,
        }
    }

    pub fn title(&self) -> &str {
        &self.artwork().title
    }

    pub fn artist(&self) -> &str {
        &self.artwork().artist
    }

    pub fn year(&self) -> i32 {
        self.artwork().year
    }

    pub fn price(&self) -> f64 {
        self.artwork().price
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().label()
    }

    pub fn display_info(&self) -> String {
        let artwork = self.artwork();
        format!(
            "[{}] Title: {}, Artist: {}, Year: {}, Price: {}",
            self.type_name(),
            artwork.title,
            artwork.artist,
            artwork.year,
            format_currency(artwork.price)
        )
    }

    /// One-line entry for a numbered listing.
    pub fn summary_line(&self) -> String {
        let artwork = self.artwork();
        format!(
            "[{}] {} ({}, {}) - {}",
            self.type_name(),
            artwork.title,
            artwork.artist,
            artwork.year,
            format_currency(artwork.price)
        )
    }
}

impl fmt::Display for Exhibition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_info())
    }
}

impl Visitable for Exhibition {
    fn visit(&self) -> String {
        format!(
            "You had a great time at the exhibition of {}: {}",
            self.kind().category(),
            self.title()
        )
    }
}

impl Sellable for Exhibition {
    fn final_price(&self, custom_price: Option<f64>) -> f64 {
        match custom_price {
            Some(price) if price > 0.0 => price,
            _ => self.price(),
        }
    }

    fn sell(&self, custom_price: Option<f64>) -> String {
        format!(
            "{} \"{}\" sold for {}.",
            self.type_name(),
            self.title(),
            format_currency(self.final_price(custom_price))
        )
    }
}

/// Formats an amount as dollars with thousands separators, e.g. `$1,500.00`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
