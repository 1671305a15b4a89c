//! Derivation path
//!
//! An ordered list of indices applied one after the other from a root key.
//! The textual form follows the BIP32 habit: `m/44'/1815'/0'/0/3`, with
//! `'` (or `h`) marking an hardened index.
//!
//! ```
//! use ed25519_bip32::DerivationPath;
//!
//! let path: DerivationPath = "m/44'/1815'/0'/0/3".parse().unwrap();
//! assert_eq!(path.depth(), 5);
//! assert_eq!(path.to_string(), "m/44'/1815'/0'/0/3");
//! ```

use super::common::{DerivationIndex, DerivationType, HARDENED_BOUNDARY};
use std::iter::FromIterator;
use std::{error, fmt, slice, str};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PathError {
    /// the path does not start with `m`
    MissingRoot,
    /// the element at the given position is empty
    EmptyElement(usize),
    /// the element at the given position is not a number
    InvalidNumber(usize),
    /// the element at the given position is already in the hardened range
    /// before applying the hardened marker
    IndexOutOfBound(usize),
}
impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::MissingRoot => f.write_str("derivation path should start with `m`"),
            PathError::EmptyElement(pos) => write!(f, "empty path element at position {}", pos),
            PathError::InvalidNumber(pos) => {
                write!(f, "invalid number at path element {}", pos)
            }
            PathError::IndexOutOfBound(pos) => write!(
                f,
                "index at path element {} should be below 0x{:x}",
                pos, HARDENED_BOUNDARY
            ),
        }
    }
}
impl error::Error for PathError {}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<DerivationIndex>);
impl DerivationPath {
    /// the empty path, designating the root key itself
    pub fn root() -> Self {
        DerivationPath(Vec::new())
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// true if every index of the path is a soft index, i.e. the path
    /// can be followed from an `XPub`
    pub fn is_soft(&self) -> bool {
        self.0.iter().all(|i| !DerivationType::from_index(*i).is_hard())
    }

    pub fn push(&mut self, index: DerivationIndex) {
        self.0.push(index)
    }

    /// a new path, one level deeper
    pub fn child(&self, index: DerivationIndex) -> Self {
        let mut path = self.clone();
        path.push(index);
        path
    }

    pub fn iter(&self) -> slice::Iter<DerivationIndex> {
        self.0.iter()
    }
}
impl AsRef<[DerivationIndex]> for DerivationPath {
    fn as_ref(&self) -> &[DerivationIndex] {
        &self.0
    }
}
impl From<Vec<DerivationIndex>> for DerivationPath {
    fn from(v: Vec<DerivationIndex>) -> Self {
        DerivationPath(v)
    }
}
impl FromIterator<DerivationIndex> for DerivationPath {
    fn from_iter<I: IntoIterator<Item = DerivationIndex>>(iter: I) -> Self {
        DerivationPath(iter.into_iter().collect())
    }
}
impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a DerivationIndex;
    type IntoIter = slice::Iter<'a, DerivationIndex>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("m")?;
        for index in self.0.iter() {
            match DerivationType::from_index(*index) {
                DerivationType::Hard(i) => write!(f, "/{}'", i - HARDENED_BOUNDARY)?,
                DerivationType::Soft(i) => write!(f, "/{}", i)?,
            }
        }
        Ok(())
    }
}
impl str::FromStr for DerivationPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut elements = s.split('/');
        match elements.next() {
            Some("m") => {}
            _ => return Err(PathError::MissingRoot),
        }

        let mut path = DerivationPath::root();
        for (pos, element) in elements.enumerate() {
            let (digits, hardened) = if let Some(d) = element.strip_suffix('\'') {
                (d, true)
            } else if let Some(d) = element.strip_suffix('h') {
                (d, true)
            } else {
                (element, false)
            };
            if digits.is_empty() {
                return Err(PathError::EmptyElement(pos));
            }
            let index = digits
                .parse::<DerivationIndex>()
                .map_err(|_| PathError::InvalidNumber(pos))?;
            if index >= HARDENED_BOUNDARY {
                return Err(PathError::IndexOutOfBound(pos));
            }
            path.push(if hardened {
                index | HARDENED_BOUNDARY
            } else {
                index
            });
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let path: DerivationPath = "m/1852'/1815h/0'/2/7".parse().unwrap();
        assert_eq!(
            path.as_ref(),
            &[0x8000_073c, 0x8000_0717, 0x8000_0000, 2, 7][..]
        );
        assert_eq!(path.to_string(), "m/1852'/1815'/0'/2/7");
        assert!(!path.is_soft());
    }

    #[test]
    fn root_path() {
        let path: DerivationPath = "m".parse().unwrap();
        assert_eq!(path, DerivationPath::root());
        assert_eq!(path.depth(), 0);
        assert!(path.is_soft());
        assert_eq!(path.to_string(), "m");
    }

    #[test]
    fn child_does_not_modify_parent() {
        let parent: DerivationPath = vec![1, 2].into();
        let child = parent.child(3);
        assert_eq!(parent.depth(), 2);
        assert_eq!(child.as_ref(), &[1, 2, 3][..]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "44'/0".parse::<DerivationPath>(),
            Err(PathError::MissingRoot)
        );
        assert_eq!(
            "m/0//1".parse::<DerivationPath>(),
            Err(PathError::EmptyElement(1))
        );
        assert_eq!(
            "m/x".parse::<DerivationPath>(),
            Err(PathError::InvalidNumber(0))
        );
        assert_eq!(
            "m/2147483648".parse::<DerivationPath>(),
            Err(PathError::IndexOutOfBound(0))
        );
    }
}
