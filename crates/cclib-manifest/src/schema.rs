use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Output name used when the manifest does not declare one.
pub const UNKNOWN_LIBRARY: &str = "UnknownLibrary";

const GROUPS: &str = "groups";
const ELEMENTS: &str = "elements";

/// A decoded library manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    pub name: Option<String>,
    pub groups: Vec<Group>,
    pub elements: Vec<Element>,
}

/// A folder-like node; groups form a forest through `parent_id`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawGroup")]
pub struct Group {
    pub id: String,
    pub name: Option<String>,
    pub parent_id: Option<String>,
}

/// `library#parentId` wins when a record carries both parent keys.
#[derive(Deserialize)]
struct RawGroup {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "library#parentId")]
    library_parent_id: Option<String>,
    #[serde(default, rename = "parentId")]
    parent_id: Option<String>,
}

impl From<RawGroup> for Group {
    fn from(raw: RawGroup) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            parent_id: raw.library_parent_id.or(raw.parent_id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Directory of the element's raw files, relative to the archive root.
    pub path: String,
    #[serde(default)]
    pub components: Vec<Component>,
    /// Owning group, keyed by a composite `...#<group id>` string.
    #[serde(default, rename = "library#groups")]
    pub group_refs: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Component {
    /// Display name; only its extension is reused.
    pub name: String,
    /// File location relative to the element directory.
    pub path: String,
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    name: Option<String>,
    children: Vec<RawContainer>,
}

#[derive(Deserialize)]
struct RawContainer {
    #[serde(default)]
    name: String,
    #[serde(default)]
    children: Vec<Value>,
}

impl Manifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawManifest = serde_json::from_str(json).map_err(|source| Error::Decode { source })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawManifest) -> Result<Self> {
        let groups = records(&raw.children, GROUPS)?;
        let elements = records(&raw.children, ELEMENTS)?;

        Ok(Self {
            name: raw.name,
            groups,
            elements,
        })
    }

    /// The declared library name, or [`UNKNOWN_LIBRARY`].
    pub fn library_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_LIBRARY)
    }
}

/// Decode the records of every container called `container`, in document order.
fn records<T>(children: &[RawContainer], container: &'static str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let mut matching = children.iter().filter(|c| c.name == container).peekable();
    if matching.peek().is_none() {
        return Err(Error::MissingContainer(container));
    }

    matching
        .flat_map(|c| c.children.iter())
        .enumerate()
        .map(|(index, value)| {
            T::deserialize(value).map_err(|source| Error::InvalidRecord {
                container,
                index,
                source,
            })
        })
        .collect()
}

impl Element {
    /// Id of the owning group: the last `#`-delimited segment of the first
    /// `library#groups` key. Empty references count as none.
    pub fn group_id(&self) -> Option<&str> {
        let key = self.group_refs.as_ref()?.keys().next()?;
        let id = key.rsplit_once('#').map_or(key.as_str(), |(_, id)| id);
        (!id.is_empty()).then_some(id)
    }
}
