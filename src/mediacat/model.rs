use serde::{Deserialize, Serialize};

/// A single keyword/value pair attached to a media file.
///
/// Instances are immutable once constructed. To change a pair, delete it
/// and add a new one (see [`crate::catalog::Catalog::set_metadata`]).
/// Keyword and value keep their original casing in storage; every
/// comparison in the crate is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    keyword: String,
    value: String,
}

impl Metadata {
    pub fn new(keyword: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            value: value.into(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Case-insensitive equality on both keyword and value.
    pub fn matches(&self, other: &Metadata) -> bool {
        eq_fold(&self.keyword, &other.keyword) && eq_fold(&self.value, &other.value)
    }
}

impl std::fmt::Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.keyword, self.value)
    }
}

/// The four media kinds a file can classify as.
///
/// A kind is never stored on a file. It is derived from which required
/// keyword set the file's metadata satisfies, see [`derive_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Document,
    Image,
    Audio,
    Video,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Document, Kind::Image, Kind::Audio, Kind::Video];

    /// The metadata keywords a file of this kind must carry.
    pub fn required_keywords(self) -> &'static [&'static str] {
        match self {
            Kind::Document => &["creator"],
            Kind::Image => &["creator", "resolution"],
            Kind::Audio => &["creator", "runtime"],
            Kind::Video => &["creator", "resolution", "runtime"],
        }
    }

    /// The snapshot discriminator string for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Document => "document",
            Kind::Image => "image",
            Kind::Audio => "audio",
            Kind::Video => "video",
        }
    }

    /// Parse a snapshot discriminator, case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|k| eq_fold(k.tag(), tag))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Derive the kind of a metadata list.
///
/// Kinds are tested most-specific first: Video, then Image, then Audio,
/// then Document. The ordering matters. A file carrying creator,
/// resolution and runtime also satisfies Image's weaker requirement, but
/// must classify as Video. The check is keyword presence only, it says
/// nothing about whether the values make sense.
///
/// Returns `None` when no required set is satisfied.
pub fn derive_kind(metadata: &[Metadata]) -> Option<Kind> {
    const PRECEDENCE: [Kind; 4] = [Kind::Video, Kind::Image, Kind::Audio, Kind::Document];
    PRECEDENCE.into_iter().find(|kind| {
        kind.required_keywords()
            .iter()
            .all(|kw| has_keyword(metadata, kw))
    })
}

/// True if any entry in the list has this keyword (case-insensitive).
pub fn has_keyword(metadata: &[Metadata], keyword: &str) -> bool {
    metadata.iter().any(|m| eq_fold(&m.keyword, keyword))
}

/// Case-insensitive string equality, the one comparison rule used
/// throughout the crate.
pub fn eq_fold(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A tracked media file: a location plus an ordered metadata list.
///
/// Two files are the same file iff their full paths are equal
/// (case-insensitively), regardless of their metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFile {
    path: String,
    filename: String,
    metadata: Vec<Metadata>,
}

impl MediaFile {
    pub fn new(
        path: impl Into<String>,
        filename: impl Into<String>,
        metadata: Vec<Metadata>,
    ) -> Self {
        Self {
            path: path.into(),
            filename: filename.into(),
            metadata,
        }
    }

    /// Build a file by splitting a full path at its last separator.
    pub fn from_fullpath(fullpath: &str, metadata: Vec<Metadata>) -> Self {
        let (path, filename) = split_fullpath(fullpath);
        Self::new(path, filename, metadata)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn metadata(&self) -> &[Metadata] {
        &self.metadata
    }

    /// Path and filename joined back together.
    pub fn fullpath(&self) -> String {
        join_fullpath(&self.path, &self.filename)
    }

    /// The derived kind of this file, if its metadata satisfies one of
    /// the required keyword sets.
    pub fn kind(&self) -> Option<Kind> {
        derive_kind(&self.metadata)
    }

    /// True iff the file carries this exact keyword/value pair
    /// (case-insensitive on both fields).
    pub fn contains(&self, item: &Metadata) -> bool {
        self.metadata.iter().any(|m| m.matches(item))
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        has_keyword(&self.metadata, keyword)
    }

    /// The search terms this file should be indexed under, one per
    /// metadata value.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.metadata.iter().map(|m| m.value())
    }

    /// Append a keyword/value pair. No uniqueness check, a keyword may
    /// appear multiple times.
    pub(crate) fn add_entry(&mut self, keyword: &str, value: &str) {
        self.metadata.push(Metadata::new(keyword, value));
    }

    /// Replace a keyword: drop all entries with it, then append the new
    /// pair.
    pub(crate) fn set_entry(&mut self, keyword: &str, value: &str) {
        self.delete_keyword(keyword);
        self.add_entry(keyword, value);
    }

    /// Drop every entry with this keyword. Returns true if anything was
    /// removed.
    pub(crate) fn delete_keyword(&mut self, keyword: &str) -> bool {
        let before = self.metadata.len();
        self.metadata.retain(|m| !eq_fold(m.keyword(), keyword));
        self.metadata.len() != before
    }

    /// Drop every entry matching both keyword and value. Returns true if
    /// anything was removed.
    pub(crate) fn remove_entry(&mut self, item: &Metadata) -> bool {
        let before = self.metadata.len();
        self.metadata.retain(|m| !m.matches(item));
        self.metadata.len() != before
    }
}

impl PartialEq for MediaFile {
    fn eq(&self, other: &Self) -> bool {
        eq_fold(&self.fullpath(), &other.fullpath())
    }
}

impl Eq for MediaFile {}

/// Split a full path into (path, filename) at the last `/`.
pub fn split_fullpath(fullpath: &str) -> (String, String) {
    match fullpath.rfind('/') {
        Some(0) => ("/".to_string(), fullpath[1..].to_string()),
        Some(i) => (fullpath[..i].to_string(), fullpath[i + 1..].to_string()),
        None => (String::new(), fullpath.to_string()),
    }
}

/// Join a (path, filename) pair, inverting [`split_fullpath`].
pub fn join_fullpath(path: &str, filename: &str) -> String {
    match path {
        "" => filename.to_string(),
        "/" => format!("/{}", filename),
        _ => format!("{}/{}", path, filename),
    }
}
