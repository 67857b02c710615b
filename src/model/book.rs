#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: String,
    /// Id of the writing author. Not checked against the author list.
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_written_by(&self, author_id: i32) -> bool {
        self.author_id == author_id
    }
}

/// Fields an `updateBook` call may change.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub name: Option<String>,
    pub author_id: Option<i32>,
}

impl BookPatch {
    /// Applies the patch in place.
    ///
    /// Empty names are skipped. Author ids below 1 are skipped as well,
    /// negative ones included.
    pub fn apply(self, book: &mut Book) {
        if let Some(name) = self.name.filter(|n| !n.is_empty()) {
            book.name = name;
        }
        if let Some(author_id) = self.author_id.filter(|id| *id > 0) {
            book.author_id = author_id;
        }
    }
}
