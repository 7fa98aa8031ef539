use crate::core::{Applied, Gallery};
use crate::domain::{format_currency, ExhibitionKind, ExhibitionStore, Pricing};
use crate::utils::error::{GalleryError, Result};
use crate::utils::validation::{
    parse_amount, parse_index, parse_year, validate_non_empty_string,
};
use std::io::{BufRead, ErrorKind, Write};

const MENU: &str = "\nGallery management system
1. Add a new artwork
2. List exhibitions
3. Sell a painting or sculpture
4. Delete an exhibition
5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    List,
    Sell,
    Delete,
    Exit,
}

impl Action {
    fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Action::Add),
            "2" => Some(Action::List),
            "3" => Some(Action::Sell),
            "4" => Some(Action::Delete),
            "5" => Some(Action::Exit),
            _ => None,
        }
    }
}

fn parse_kind(choice: &str) -> Result<ExhibitionKind> {
    match choice.trim() {
        "1" => Ok(ExhibitionKind::Painting),
        "2" => Ok(ExhibitionKind::Sculpture),
        other => Err(GalleryError::ValidationError {
            field: "type".to_string(),
            value: other.to_string(),
            reason: "Choose 1 for a painting or 2 for a sculpture".to_string(),
        }),
    }
}

/// Interactive text menu over a gallery. Every action error is reported and
/// the loop continues; only console failures end it.
pub struct Menu<S: ExhibitionStore, R: BufRead, W: Write> {
    gallery: Gallery<S>,
    pricing: Pricing,
    current_year: i32,
    input: R,
    output: W,
}

impl<S: ExhibitionStore, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(gallery: Gallery<S>, pricing: Pricing, current_year: i32, input: R, output: W) -> Self {
        Self {
            gallery,
            pricing,
            current_year,
            input,
            output,
        }
    }

    pub fn gallery(&self) -> &Gallery<S> {
        &self.gallery
    }

    pub fn into_parts(self) -> (Gallery<S>, W) {
        (self.gallery, self.output)
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.read_prompt("Choose an option: ")? else {
                tracing::debug!("Input closed, leaving menu");
                return Ok(());
            };

            let result = match Action::parse(&choice) {
                Some(Action::Add) => self.add_exhibition(),
                Some(Action::List) => self.list_exhibitions(),
                Some(Action::Sell) => self.sell_exhibition(),
                Some(Action::Delete) => self.delete_exhibition(),
                Some(Action::Exit) => return Ok(()),
                None => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Ok(())
                }
            };

            if let Err(e) = result {
                if !e.is_recoverable() {
                    return Err(e);
                }
                tracing::debug!("Action failed: {}", e);
                writeln!(self.output, "Error: {}", e.user_friendly_message())?;
            }
        }
    }

    fn add_exhibition(&mut self) -> Result<()> {
        let title = self.prompt("Enter the title: ")?;
        validate_non_empty_string("title", &title)?;
        let artist = self.prompt("Enter the artist's name: ")?;
        validate_non_empty_string("artist", &artist)?;
        let year = parse_year("year", &self.prompt("Enter the year of creation: ")?)?;
        let kind = parse_kind(&self.prompt("Choose the type (1: Painting, 2: Sculpture): ")?)?;

        let exhibition = self
            .pricing
            .create(kind, title.trim(), artist.trim(), year, self.current_year);
        writeln!(self.output, "{}", exhibition.display_info())?;

        if self.prompt("Save this artwork? (1: Yes, 0: No): ")?.trim() == "1" {
            let applied = self.gallery.add(exhibition);
            self.report_saved(&applied, "Artwork saved.")?;
        } else {
            writeln!(self.output, "Artwork not saved.")?;
        }
        Ok(())
    }

    fn list_exhibitions(&mut self) -> Result<()> {
        if self.gallery.is_empty() {
            writeln!(self.output, "There are no exhibitions.")?;
            return Ok(());
        }

        for (i, exhibition) in self.gallery.exhibitions().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, exhibition.summary_line())?;
        }

        let choice = self.prompt("Choose an exhibition to visit or press Enter to return: ")?;
        if choice.trim().is_empty() {
            return Ok(());
        }

        let index = parse_index(&choice, self.gallery.len())?;
        let narrative = self.gallery.visit(index)?;
        writeln!(self.output, "{}", narrative)?;
        Ok(())
    }

    fn sell_exhibition(&mut self) -> Result<()> {
        let choice = self.prompt("Enter the number of the exhibition to sell: ")?;
        let index = parse_index(&choice, self.gallery.len())?;
        let current_price = self.gallery.get(index)?.price();

        let question = format!(
            "Sell at the current price ({}) or enter your own? (1: Current, 2: Custom): ",
            format_currency(current_price)
        );
        let custom_price = if self.prompt(&question)?.trim() == "2" {
            Some(parse_amount("price", &self.prompt("Enter your price: ")?)?)
        } else {
            None
        };

        let applied = self.gallery.sell(index, custom_price)?;
        let narrative = applied.outcome.narrative.clone();
        self.report_saved(&applied, &narrative)
    }

    fn delete_exhibition(&mut self) -> Result<()> {
        let choice = self.prompt("Enter the number of the exhibition to delete: ")?;
        let index = parse_index(&choice, self.gallery.len())?;
        let applied = self.gallery.delete(index)?;
        self.report_saved(&applied, "Exhibition deleted.")
    }

    fn report_saved<T>(&mut self, applied: &Applied<T>, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        if let Err(e) = &applied.persisted {
            writeln!(
                self.output,
                "Warning: {}. {}.",
                e.user_friendly_message(),
                e.recovery_suggestion()
            )?;
        }
        Ok(())
    }

    /// Reads one answer; end of input inside an action is a console error.
    fn prompt(&mut self, text: &str) -> Result<String> {
        self.read_prompt(text)?.ok_or_else(|| {
            GalleryError::IoError(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input ended in the middle of an action",
            ))
        })
    }

    fn read_prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
