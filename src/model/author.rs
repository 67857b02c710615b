#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl Author {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Fields an `updateAuthor` call may change.
#[derive(Debug, Clone, Default)]
pub struct AuthorPatch {
    pub name: Option<String>,
}

impl AuthorPatch {
    /// Applies the patch in place. An empty name leaves the record untouched.
    pub fn apply(self, author: &mut Author) {
        if let Some(name) = self.name.filter(|n| !n.is_empty()) {
            author.name = name;
        }
    }
}
