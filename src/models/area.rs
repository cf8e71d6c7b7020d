//! Named node of the road network.

use serde::{Deserialize, Serialize};

/// An area of the road network.
///
/// Identity is the name plus its stable index into the network. Areas are
/// created once when the network is built and never change afterwards.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Area;
///
/// let a = Area::new(0, "Kanabargi");
/// assert_eq!(a.index(), 0);
/// assert_eq!(a.name(), "Kanabargi");
/// assert_eq!(a.ordinal(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    index: usize,
    name: String,
}

impl Area {
    /// Creates an area at the given network index.
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// Zero-based network index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based ordinal used when operators address areas.
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }

    /// Area name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.ordinal(), self.name)
    }
}
