/// One stored definition row. Entries are created at store-build time and
/// never mutated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub language: String,
    pub part_of_speech: String,
    pub ipa: Option<String>,
    pub definition: String,
}
