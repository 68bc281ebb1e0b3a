/// A volunteer on the roster.
///
/// Reference data: created and removed by roster management, never by the
/// attendance store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sewadar {
    pub id: String,
    pub name: String,
}

impl Sewadar {
    pub fn new(id: &str, name: &str) -> Self {
        Sewadar {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Case-insensitive substring search over the roster by name, preserving
/// roster order. The interactive picker only consults this once the query
/// is non-empty; an empty query here returns the whole roster.
pub fn filter_sewadars(all: &[Sewadar], search: &str) -> Vec<Sewadar> {
    let needle = search.to_lowercase();
    all.iter().filter(|s| s.name.to_lowercase().contains(&needle)).cloned().collect()
}
