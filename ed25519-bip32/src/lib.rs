//! Ed25519 key handling using BIP32 style derivation
//!
//! Ed25519 is notable for its public key generation involving hashing and bit manipulations,
//! which seemingly prevents its use for BIP32. Instead this package use the ed25519 in its
//! extended form (post-hashing), following the BIP32-Ed25519 paper by Khovratovich and Law.
//!
//! BIP32 allows derivation given a private key, of up to 2^32 children, using
//! two different derivation scheme (soft or hard).
//!
//! In soft derivation, the important property is that given the parent public key,
//! one can derive all softly derived children public key.
//!
//! ```
//! use ed25519_bip32::{Seed, Signature, XPrv};
//!
//! let seed = Seed::from_slice(&[0x42; 32]).unwrap();
//! let root = XPrv::generate_from_seed(&seed);
//!
//! // watch-only derivation of soft children
//! let child_pub = root.public().derive_path(&[0u32, 1]).unwrap();
//! let child_prv = root.derive_path(&[0u32, 1]);
//! assert_eq!(child_prv.public(), child_pub);
//!
//! let signature: Signature<()> = child_prv.sign(b"message");
//! assert!(child_pub.verify(b"message", &signature));
//! ```

#![cfg_attr(feature = "with-bench", feature(test))]
#[cfg(test)]
#[cfg(feature = "with-bench")]
extern crate test;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

mod arithmetic;
pub mod curve;
mod derivation;
mod error;
pub mod hex;
mod key;
mod securemem;
mod signature;


#[cfg(test)]
#[cfg(feature = "with-bench")]
mod bench;

pub use arithmetic::{add_256bits, add_28_mul8};
pub use derivation::{
    DerivationIndex, DerivationPath, DerivationType, PathError, HARDENED_BOUNDARY,
};
pub use error::{Error, Result};
pub use key::{
    ChainCode, Seed, XPrv, XPub, CHAIN_CODE_SIZE, PUBLIC_KEY_SIZE, SEED_MIN_SIZE, XPRV_SIZE,
    XPUB_SIZE,
};
pub use signature::{Signature, SIGNATURE_SIZE};
