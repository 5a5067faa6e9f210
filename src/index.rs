//! Tag index: major version -> anchor tag.
//!
//! The index is built from the raw tag list and is the pure data input to
//! plan computation. It never touches the working tree.

use std::collections::BTreeMap;

use semver::Version;

use crate::domain::version;

/// The tag chosen to anchor a major version's release branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorTag {
    pub name: String,
    pub version: Version,
}

/// Mapping from major version to its anchor tag.
///
/// Anchor selection policy: per major, the tag with the numerically
/// greatest `(minor, patch, prerelease)` by SemVer precedence wins,
/// independent of the order the backend returned the tags in. This is
/// deliberate: [crate::git::Git2Repository] lists tags in lexicographic
/// order, not version order, so a first-seen policy would pick wrong
/// anchors there. When two tags compare equal (build metadata only), the
/// first one seen is kept.
///
/// Tags that fail SemVer validation are skipped; they never fail the build.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    anchors: BTreeMap<u64, AnchorTag>,
}

impl TagIndex {
    /// Build the index by scanning a raw tag list.
    pub fn build<S: AsRef<str>>(tags: &[S]) -> Self {
        let mut anchors: BTreeMap<u64, AnchorTag> = BTreeMap::new();

        for tag in tags {
            let tag = tag.as_ref();
            let Some(parsed) = version::parse(tag) else {
                continue;
            };

            let replace = match anchors.get(&parsed.major) {
                Some(current) => parsed > current.version,
                None => true,
            };

            if replace {
                anchors.insert(
                    parsed.major,
                    AnchorTag {
                        name: tag.to_string(),
                        version: parsed,
                    },
                );
            }
        }

        TagIndex { anchors }
    }

    /// Anchor tag for a major version, if any tag of that major exists.
    pub fn anchor(&self, major: u64) -> Option<&AnchorTag> {
        self.anchors.get(&major)
    }

    /// The greatest major present, or `None` for an empty index.
    pub fn highest_major(&self) -> Option<u64> {
        self.anchors.keys().next_back().copied()
    }

    /// Iterate anchors in ascending major order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &AnchorTag)> {
        self.anchors.iter().map(|(major, anchor)| (*major, anchor))
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }
}
