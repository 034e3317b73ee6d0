//! Page layout of a shopping list. Coordinates are PDF points measured from the bottom-left
//! corner of a US-letter page.

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN_LEFT: f32 = 72.0;
pub const TOP_Y: f32 = 750.0;
pub const BOTTOM_Y: f32 = 50.0;
pub const TITLE_GAP: f32 = 30.0;
pub const LINE_HEIGHT: f32 = 20.0;
pub const TITLE_SIZE: f32 = 16.0;
pub const LINE_SIZE: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: Font,
    pub size: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub title: String,
    pub pages: Vec<Page>,
}

pub fn format_item(amount: &str, name: &str) -> String {
    let amount = amount.trim();

    if amount.is_empty() {
        format!("- {name}")
    } else {
        format!("- {amount} {name}")
    }
}

impl ShoppingList {
    /// Lay out `(amount, name)` items in the given order below the title.
    pub fn new<'a>(
        recipe_name: &str,
        items: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let title = format!("Shopping List for {recipe_name}");
        let mut pages = Vec::new();
        let mut page = Page {
            lines: vec![PlacedLine {
                text: title.to_owned(),
                x: MARGIN_LEFT,
                y: TOP_Y,
                font: Font::Bold,
                size: TITLE_SIZE,
            }],
        };
        let mut y = TOP_Y - TITLE_GAP;

        for (amount, name) in items {
            if y < BOTTOM_Y {
                pages.push(std::mem::take(&mut page));
                y = TOP_Y;
            }

            page.lines.push(PlacedLine {
                text: format_item(amount, name),
                x: MARGIN_LEFT,
                y,
                font: Font::Regular,
                size: LINE_SIZE,
            });
            y -= LINE_HEIGHT;
        }

        pages.push(page);

        Self { title, pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<(String, String)> {
        (0..count)
            .map(|i| (format!("{i} g"), format!("item{i}")))
            .collect()
    }

    fn layout(name: &str, items: &[(String, String)]) -> ShoppingList {
        ShoppingList::new(
            name,
            items.iter().map(|(a, n)| (a.as_str(), n.as_str())),
        )
    }

    #[test]
    fn test_format_item() {
        assert_eq!(format_item("1 cup", "flour"), "- 1 cup flour");
        assert_eq!(format_item("", "salt"), "- salt");
        assert_eq!(format_item("  ", "salt"), "- salt");
    }

    #[test]
    fn test_single_page() {
        let list = layout("Soup", &items(3));

        assert_eq!(list.pages.len(), 1);
        let lines = &list.pages[0].lines;
        assert_eq!(lines[0].text, "Shopping List for Soup");
        assert_eq!(lines[0].font, Font::Bold);
        assert_eq!(lines[0].y, 750.0);
        assert_eq!(lines[1].text, "- 0 g item0");
        assert_eq!(lines[1].y, 720.0);
        assert_eq!(lines[2].y, 700.0);
        assert_eq!(lines[3].y, 680.0);
    }

    #[test]
    fn test_forty_items_span_pages_with_title_once() {
        let list = layout("Stew", &items(40));

        assert_eq!(list.pages.len(), 2);
        assert_eq!(list.pages[0].lines.len(), 1 + 34);
        assert_eq!(list.pages[1].lines.len(), 6);

        let titles = list
            .pages
            .iter()
            .flat_map(|page| page.lines.iter())
            .filter(|line| line.font == Font::Bold)
            .count();
        assert_eq!(titles, 1);

        assert_eq!(list.pages[0].lines[34].y, 60.0);
        assert_eq!(list.pages[1].lines[0].text, "- 34 g item34");
        assert_eq!(list.pages[1].lines[0].y, 750.0);
        assert!(
            list.pages
                .iter()
                .flat_map(|page| page.lines.iter())
                .all(|line| line.y >= BOTTOM_Y)
        );
    }

    #[test]
    fn test_empty_list_has_title_page() {
        let list = layout("Water", &[]);

        assert_eq!(list.pages.len(), 1);
        assert_eq!(list.pages[0].lines.len(), 1);
    }
}
