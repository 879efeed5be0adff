//! Bottom navigation tabs.
//!
//! Selecting a tab only moves the highlight; every tab shows the same
//! dashboard.
//!
//! # Tabs
//!
//! - [`Tab::Home`]: "Ana Sayfa"
//! - [`Tab::Statistics`]: "İstatistikler"
//! - [`Tab::Settings`]: "Ayarlar"

/// Items of the bottom navigation bar, left to right.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Tab {
    #[default]
    Home,
    Statistics,
    Settings,
}

impl Tab {
    /// Number of navigation items.
    pub const COUNT: usize = 3;

    /// All tabs in bar order.
    pub const ALL: [Self; Self::COUNT] = [Self::Home, Self::Statistics, Self::Settings];

    /// Position of the tab in the bar.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Statistics => 1,
            Self::Settings => 2,
        }
    }

    /// Tab at `index`, or `None` if there is no such item.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Home),
            1 => Some(Self::Statistics),
            2 => Some(Self::Settings),
            _ => None,
        }
    }

    /// Caption under the tab icon.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Ana Sayfa",
            Self::Statistics => "İstatistikler",
            Self::Settings => "Ayarlar",
        }
    }
}

/// Which navigation item is highlighted.
///
/// Changes only through [`TabState::select`]; an out-of-range index leaves
/// the selection untouched.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct TabState {
    selected: Tab,
}

impl TabState {
    pub const fn new(selected: Tab) -> Self { Self { selected } }

    /// Currently highlighted tab.
    #[inline]
    pub const fn selected(&self) -> Tab { self.selected }

    /// Highlight the tab at `index`.
    ///
    /// Returns the newly selected tab, or `None` if `index` is out of range.
    pub fn select(&mut self, index: usize) -> Option<Tab> {
        let tab = Tab::from_index(index)?;
        self.selected = tab;
        Some(tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_default() {
        assert_eq!(Tab::default(), Tab::Home);
        assert_eq!(TabState::default().selected(), Tab::Home);
    }

    #[test]
    fn test_tab_index_round_trip() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i, "{tab:?} should sit at position {i}");
            assert_eq!(Tab::from_index(i), Some(*tab));
        }
    }

    #[test]
    fn test_tab_from_index_out_of_range() {
        assert_eq!(Tab::from_index(3), None);
        assert_eq!(Tab::from_index(usize::MAX), None);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Home.label(), "Ana Sayfa");
        assert_eq!(Tab::Statistics.label(), "İstatistikler");
        assert_eq!(Tab::Settings.label(), "Ayarlar");
    }

    #[test]
    fn test_select_valid_index() {
        let mut state = TabState::default();
        assert_eq!(state.select(2), Some(Tab::Settings));
        assert_eq!(state.selected(), Tab::Settings);
        assert_eq!(state.select(0), Some(Tab::Home));
        assert_eq!(state.selected(), Tab::Home);
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut state = TabState::new(Tab::Statistics);
        assert_eq!(state.select(3), None, "Index 3 should be rejected");
        assert_eq!(state.selected(), Tab::Statistics, "Rejected index leaves selection unchanged");
    }
}
