/// A navigation entry pointing at a section of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub section_id: &'static str,
    pub label: &'static str,
}

impl NavigationItem {
    pub const fn new(section_id: &'static str, label: &'static str) -> Self {
        Self { section_id, label }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

pub const NAV_ITEMS: [NavigationItem; 5] = [
    NavigationItem::new("home", "Home"),
    NavigationItem::new("about", "About"),
    NavigationItem::new("services", "Services"),
    NavigationItem::new("gallery", "Gallery"),
    NavigationItem::new("contact", "Contact"),
];

/// Document-relative geometry of a rendered section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, position: f64) -> bool {
        self.top <= position && position < self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let bounds = SectionBounds::new(100.0, 50.0);
        assert!(!bounds.contains(99.9));
        assert!(bounds.contains(100.0));
        assert!(bounds.contains(149.9));
        assert!(!bounds.contains(150.0));
    }

    #[test]
    fn nav_items_link_to_their_sections() {
        let hrefs: Vec<String> = NAV_ITEMS.iter().map(NavigationItem::href).collect();
        assert_eq!(hrefs, ["#home", "#about", "#services", "#gallery", "#contact"]);
    }
}
