//! Static Assets
//!
//! Icons are referenced by name; files live under `public/icons/`.

/// Icon set used by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Search,
    Add,
    Edit,
    Delete,
    Check,
    Moon,
    Sun,
    Dropdown,
    Empty,
}

impl Icon {
    pub const ALL: [Icon; 9] = [
        Icon::Search,
        Icon::Add,
        Icon::Edit,
        Icon::Delete,
        Icon::Check,
        Icon::Moon,
        Icon::Sun,
        Icon::Dropdown,
        Icon::Empty,
    ];

    fn file_stem(&self) -> &'static str {
        match self {
            Icon::Search => "search",
            Icon::Add => "add",
            Icon::Edit => "edit",
            Icon::Delete => "delete",
            Icon::Check => "check",
            Icon::Moon => "moon",
            Icon::Sun => "sun",
            Icon::Dropdown => "dropdown",
            Icon::Empty => "empty",
        }
    }

    pub fn src(&self) -> String {
        format!("public/icons/{}.svg", self.file_stem())
    }

    pub fn alt(&self) -> &'static str {
        match self {
            Icon::Search => "Search Icon",
            Icon::Add => "Add Icon",
            Icon::Edit => "Edit Icon",
            Icon::Delete => "Delete Icon",
            Icon::Check => "Checked Icon",
            Icon::Moon | Icon::Sun => "Mode Icon",
            Icon::Dropdown => "Dropdown Icon",
            Icon::Empty => "Empty Todos",
        }
    }
}
