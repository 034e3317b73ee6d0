use printpdf::{IndirectFontRef, Mm, PdfDocument};

use crate::{Font, PAGE_HEIGHT, PAGE_WIDTH, ShoppingList};

// Built-in PDF fonts only encode WinAnsi, so recipe text outside Latin-1 needs an embedded face.
static REGULAR_FONT: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");
static BOLD_FONT: &[u8] = include_bytes!("../fonts/DejaVuSans-Bold.ttf");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pdf: {0}")]
    Pdf(String),
}

fn mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

impl ShoppingList {
    pub fn render_pdf(&self) -> Result<Vec<u8>, Error> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            self.title.to_owned(),
            mm(PAGE_WIDTH),
            mm(PAGE_HEIGHT),
            "Layer 1",
        );

        let regular = doc
            .add_external_font(REGULAR_FONT)
            .map_err(|e| Error::Pdf(e.to_string()))?;
        let bold = doc
            .add_external_font(BOLD_FONT)
            .map_err(|e| Error::Pdf(e.to_string()))?;

        for (index, page) in self.pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (new_page, new_layer) =
                    doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
                doc.get_page(new_page).get_layer(new_layer)
            };

            for line in &page.lines {
                let font: &IndirectFontRef = match line.font {
                    Font::Regular => &regular,
                    Font::Bold => &bold,
                };

                layer.use_text(
                    line.text.to_owned(),
                    line.size,
                    mm(line.x),
                    mm(line.y),
                    font,
                );
            }
        }

        let bytes = doc.save_to_bytes().map_err(|e| Error::Pdf(e.to_string()))?;

        tracing::debug!(pages = self.pages.len(), size = bytes.len(), "shopping list rendered");

        Ok(bytes)
    }
}
