//! Package versions as ordered in reports.

use super::VersionError;
use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;
use std::str::FromStr;

/// A package version with one to four numeric parts.
///
/// Missing parts count as zero, so `1.0`, `1.0.0` and `1.0.0.0` order the
/// same. Release labels and build metadata follow SemVer rules; build metadata
/// does not affect ordering.
#[derive(Debug, Clone)]
pub struct PackageVersion {
    version: Version,
    revision: u64,
}

impl PackageVersion {
    /// Returns the SemVer portion (first three parts, label, metadata).
    #[must_use]
    pub fn semver(&self) -> &Version {
        &self.version
    }

    /// Returns the fourth numeric part, zero if absent.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl FromStr for PackageVersion {
    type Err = VersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| VersionError::Malformed {
            reason: reason.to_string(),
        };

        let (rest, metadata) = match text.split_once('+') {
            Some((rest, metadata)) => (rest, Some(metadata)),
            None => (text, None),
        };
        let (core, label) = match rest.split_once('-') {
            Some((core, label)) => (core, Some(label)),
            None => (rest, None),
        };

        if label == Some("") || metadata == Some("") {
            return Err(invalid("empty release label or build metadata"));
        }

        let mut parts = core.split('.').collect::<Vec<_>>();
        if parts.len() > 4 {
            return Err(invalid("more than four numeric parts"));
        }

        let revision = if parts.len() == 4 {
            let revision = parts.pop().unwrap_or_default();
            revision
                .parse::<u64>()
                .map_err(|_| invalid("revision is not a number"))?
        } else {
            0
        };
        parts.resize(3, "0");

        let mut version = Version::parse(&parts.join("."))?;
        if let Some(label) = label {
            version.pre = Prerelease::new(label)?;
        }
        if let Some(metadata) = metadata {
            version.build = BuildMetadata::new(metadata)?;
        }

        Ok(Self { version, revision })
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let key = |v: &Self| (v.version.major, v.version.minor, v.version.patch, v.revision);
        key(self)
            .cmp(&key(other))
            .then_with(|| self.version.pre.cmp(&other.version.pre))
    }
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> PackageVersion {
        text.parse().unwrap()
    }

    #[test]
    fn pads_short_versions() {
        let version = parse("1.0");
        assert_eq!(version.semver(), &Version::new(1, 0, 0));
        assert_eq!(version.revision(), 0);
        assert_eq!(parse("1").semver(), &Version::new(1, 0, 0));
    }

    #[test]
    fn accepts_revision_part() {
        let version = parse("4.0.0.1");
        assert_eq!(version.semver(), &Version::new(4, 0, 0));
        assert_eq!(version.revision(), 1);
    }

    #[test]
    fn padded_spellings_order_equally() {
        assert_eq!(parse("1.0").cmp(&parse("1.0.0.0")), Ordering::Equal);
    }

    #[test]
    fn orders_numerically_then_by_label() {
        assert!(parse("1.2.3.4") > parse("1.2.3"));
        assert!(parse("1.2.3.4") < parse("1.2.4"));
        assert!(parse("10.0") > parse("9.0.0"));
        assert!(parse("2.0.0-beta.1") < parse("2.0.0"));
        assert!(parse("2.0.0-alpha") < parse("2.0.0-beta"));
        assert!(parse("1.0.0.1-rc.1") > parse("1.0.0-rc.1"));
    }

    #[test]
    fn ignores_build_metadata_in_ordering() {
        assert_eq!(parse("1.0.0+abc").cmp(&parse("1.0.0+def")), Ordering::Equal);
        assert_eq!(parse("1.0.0+abc"), parse("1.0+def"));
    }

    #[test]
    fn rejects_malformed_versions() {
        for text in ["not-a-version", "", "1.2.3.4.5", "1.2.3.x", "1..2", "1.2.3-"] {
            assert!(
                text.parse::<PackageVersion>().is_err(),
                "'{text}' should not parse"
            );
        }
    }
}
