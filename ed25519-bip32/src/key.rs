use crate::curve::{CurveOps, Ed25519};
use crate::derivation::{self, DerivationIndex};
use crate::error::{Error, Result};
use crate::hex;
use crate::securemem;
use crate::signature::{self, Signature};
use cryptoxide::digest::Digest;
use cryptoxide::sha2::{Sha256, Sha512};
use cryptoxide::util::fixed_time_eq;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Minimum seed size in bytes
pub const SEED_MIN_SIZE: usize = 32;

/// Extended Private key size in bytes
pub const XPRV_SIZE: usize = 96;

/// Extended Public key size in bytes
pub const XPUB_SIZE: usize = 64;
pub const PUBLIC_KEY_SIZE: usize = 32;
pub const CHAIN_CODE_SIZE: usize = 32;

pub type ChainCode = [u8; CHAIN_CODE_SIZE];

/// Seed used to generate the root private key of the HDWallet.
///
/// ```
/// use ed25519_bip32::Seed;
///
/// assert!(Seed::from_slice(&[0u8; 31]).is_err());
/// assert!(Seed::from_slice(&[0u8; 64]).is_ok());
/// ```
#[derive(Clone)]
pub struct Seed(Vec<u8>);
impl Seed {
    /// create a Seed by copying the given slice, which must hold at least
    /// `SEED_MIN_SIZE` bytes.
    pub fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() < SEED_MIN_SIZE {
            return Err(Error::InvalidLength {
                expected: SEED_MIN_SIZE,
                received: buf.len(),
            });
        }
        Ok(Seed(buf.to_vec()))
    }
}
impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Seed(<{} bytes>)", self.0.len())
    }
}
impl Drop for Seed {
    fn drop(&mut self) {
        securemem::zero(&mut self.0);
    }
}

/// HDWallet extended private key
///
/// Effectively this is an ed25519 extended secret key (64 bytes) followed by a chain code (32 bytes).
///
pub struct XPrv([u8; XPRV_SIZE]);
impl XPrv {
    /// create the Root private key `XPrv` of the HDWallet associated to this `Seed`
    ///
    /// The key material is the hash of the first 32 bytes of the seed only,
    /// while the chain code covers the whole seed.
    ///
    /// ```
    /// use ed25519_bip32::{Seed, XPrv};
    ///
    /// let seed = Seed::from_slice(&[0u8; 32]).unwrap();
    /// let xprv = XPrv::generate_from_seed(&seed);
    /// ```
    pub fn generate_from_seed(seed: &Seed) -> Self {
        let bytes = seed.as_ref();
        let mut out = [0u8; XPRV_SIZE];

        let mut hasher = Sha512::new();
        hasher.input(&bytes[0..SEED_MIN_SIZE]);
        hasher.result(&mut out[0..64]);
        out[0] &= 0b1111_1000;
        out[31] &= 0b0101_1111;
        out[31] |= 0b0100_0000;

        let mut hasher = Sha256::new();
        hasher.input(&[0x01]);
        hasher.input(bytes);
        hasher.result(&mut out[64..96]);

        Self::from_bytes(out)
    }

    /// takes the given raw bytes and perform some modifications to normalize
    /// it properly to a XPrv, the 3rd highest bit is cleared too.
    pub fn normalize_bytes(mut bytes: [u8; XPRV_SIZE]) -> Self {
        bytes[0] &= 0b1111_1000;
        bytes[31] &= 0b0101_1111;
        bytes[31] |= 0b0100_0000;

        Self::from_bytes(bytes)
    }

    // Create a XPrv from the given bytes.
    //
    // This function does not perform any validity check and should not be used outside
    // of this crate.
    pub(crate) fn from_bytes(bytes: [u8; XPRV_SIZE]) -> Self {
        XPrv(bytes)
    }

    /// Create a `XPrv` by taking ownership of the given array
    ///
    /// This function may returns an error if it does not have the expected
    /// format. The 3rd highest bit is allowed to be set since derived keys
    /// may carry into it, see `is_3rd_highest_bit_clear`.
    pub fn from_bytes_verified(bytes: [u8; XPRV_SIZE]) -> Result<Self> {
        let last = bytes[31];
        let first = bytes[0];

        if (last & 0b1100_0000) != 0b0100_0000 {
            return Err(Error::InvalidKeyEncoding(
                "expected 2 highest bits to be 0b01",
            ));
        }
        if (first & 0b0000_0111) != 0b0000_0000 {
            return Err(Error::InvalidKeyEncoding(
                "expected 3 lowest bits to be 0b000",
            ));
        }

        Ok(XPrv(bytes))
    }

    pub fn from_slice_verified(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != XPRV_SIZE {
            return Err(Error::InvalidLength {
                expected: XPRV_SIZE,
                received: bytes.len(),
            });
        }
        let mut buf = [0u8; XPRV_SIZE];
        buf[..].clone_from_slice(bytes);
        let r = XPrv::from_bytes_verified(buf);
        securemem::zero(&mut buf);
        r
    }

    /// Create a `XPrv` from a given hexadecimal string
    ///
    pub fn from_hex(hex: &str) -> Result<Self> {
        let mut input = hex::decode(hex)?;
        let r = Self::from_slice_verified(&input);
        securemem::zero(&mut input);
        r
    }

    /// Check if the 3rd highest bit is clear, as it is for root keys
    pub fn is_3rd_highest_bit_clear(&self) -> bool {
        (self.0[31] & 0b0010_0000) == 0
    }

    pub fn to_bytes(&self) -> [u8; XPRV_SIZE] {
        self.0
    }

    /// `kL || kR`
    pub fn extended_secret_key(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out.clone_from_slice(&self.0[0..64]);
        out
    }

    pub fn chain_code(&self) -> ChainCode {
        let mut out = [0u8; CHAIN_CODE_SIZE];
        out.clone_from_slice(&self.0[64..96]);
        out
    }

    /// the Ed25519 public key `[kL]B`
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let mut ekey = self.extended_secret_key();
        let (mut kl, _) = halves(&ekey);
        let pk = mk_public_key::<Ed25519>(&kl);
        securemem::zero(&mut kl);
        securemem::zero(&mut ekey);
        pk
    }

    /// Get the associated `XPub`
    ///
    /// ```
    /// use ed25519_bip32::{Seed, XPrv};
    ///
    /// let seed = Seed::from_slice(&[0; 32]).unwrap();
    /// let xprv = XPrv::generate_from_seed(&seed);
    ///
    /// let xpub = xprv.public();
    /// assert_eq!(xpub.chain_code(), xprv.chain_code());
    /// ```
    pub fn public(&self) -> XPub {
        let mut out = [0u8; XPUB_SIZE];
        mk_xpub(&mut out, &self.public_key(), &self.chain_code());
        XPub::from_bytes(out)
    }

    /// sign the given message with the `XPrv`.
    ///
    /// ```
    /// use ed25519_bip32::{Seed, Signature, XPrv};
    ///
    /// let seed = Seed::from_slice(&[0; 32]).unwrap();
    /// let xprv = XPrv::generate_from_seed(&seed);
    /// let msg = b"Some message...";
    ///
    /// let signature: Signature<String> = xprv.sign(msg);
    /// assert!(xprv.verify(msg, &signature));
    /// ```
    pub fn sign<T>(&self, message: &[u8]) -> Signature<T> {
        let mut ekey = self.extended_secret_key();
        let (mut kl, mut kr) = halves(&ekey);
        let pk = mk_public_key::<Ed25519>(&kl);
        let signature = signature::sign::<Ed25519>(&kl, &kr, &pk, message);
        securemem::zero(&mut kl);
        securemem::zero(&mut kr);
        securemem::zero(&mut ekey);
        Signature::from_bytes(signature)
    }

    /// verify a given signature
    ///
    pub fn verify<T>(&self, message: &[u8], signature: &Signature<T>) -> bool {
        let xpub = self.public();
        xpub.verify(message, signature)
    }

    pub fn derive(&self, index: DerivationIndex) -> Self {
        derivation::private::<Ed25519>(self, index)
    }

    /// derive every index of the path in turn, the empty path gives
    /// a copy of this key.
    pub fn derive_path<P: AsRef<[DerivationIndex]>>(&self, path: P) -> Self {
        path.as_ref()
            .iter()
            .fold(self.clone(), |xprv, index| xprv.derive(*index))
    }
}
impl PartialEq for XPrv {
    fn eq(&self, rhs: &XPrv) -> bool {
        fixed_time_eq(self.as_ref(), rhs.as_ref())
    }
}
impl Eq for XPrv {}
impl Clone for XPrv {
    fn clone(&self) -> Self {
        XPrv(self.0)
    }
}
impl fmt::Debug for XPrv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl fmt::Display for XPrv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl AsRef<[u8]> for XPrv {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl Drop for XPrv {
    fn drop(&mut self) {
        securemem::zero(&mut self.0);
    }
}

/// Extended Public Key (Point + ChainCode)
///
/// The point is not checked when the key is built; an invalid point is
/// reported by the first operation needing it.
#[derive(Clone, Copy)]
pub struct XPub([u8; XPUB_SIZE]);
impl XPub {
    /// create a `XPub` by taking ownership of the given array
    pub fn from_bytes(bytes: [u8; XPUB_SIZE]) -> Self {
        XPub(bytes)
    }

    /// create a `XPub` from the given slice. This slice must be of size `XPUB_SIZE`
    /// otherwise it will return `Error::InvalidLength`.
    ///
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != XPUB_SIZE {
            return Err(Error::InvalidLength {
                expected: XPUB_SIZE,
                received: bytes.len(),
            });
        }
        let mut buf = [0u8; XPUB_SIZE];
        buf[..].clone_from_slice(bytes);
        Ok(Self::from_bytes(buf))
    }

    /// create a `XPub` from a given hexadecimal string
    ///
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::decode(hex)?;
        Self::from_slice(&bytes)
    }

    pub fn to_bytes(&self) -> [u8; XPUB_SIZE] {
        self.0
    }

    pub fn public_key(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let mut out = [0u8; PUBLIC_KEY_SIZE];
        out.clone_from_slice(&self.0[0..32]);
        out
    }

    pub fn chain_code(&self) -> ChainCode {
        let mut out = [0u8; CHAIN_CODE_SIZE];
        out.clone_from_slice(&self.0[32..64]);
        out
    }

    /// verify a signature
    ///
    /// An `XPub` holding an invalid point never verifies anything.
    pub fn verify<T>(&self, message: &[u8], signature: &Signature<T>) -> bool {
        signature::verify::<Ed25519>(&self.public_key(), message, &signature.to_bytes())
    }

    pub fn derive(&self, index: DerivationIndex) -> Result<Self> {
        derivation::public::<Ed25519>(self, index)
    }

    /// derive every index of the path in turn, stopping at the first
    /// failure.
    pub fn derive_path<P: AsRef<[DerivationIndex]>>(&self, path: P) -> Result<Self> {
        path.as_ref()
            .iter()
            .try_fold(*self, |xpub, index| xpub.derive(*index))
    }
}
impl PartialEq for XPub {
    fn eq(&self, rhs: &XPub) -> bool {
        fixed_time_eq(self.as_ref(), rhs.as_ref())
    }
}
impl Eq for XPub {}
impl Hash for XPub {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.0)
    }
}
impl fmt::Display for XPub {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl fmt::Debug for XPub {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl AsRef<[u8]> for XPub {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

pub(crate) fn halves(bytes: &[u8; 64]) -> ([u8; 32], [u8; 32]) {
    let mut left = [0u8; 32];
    let mut right = [0u8; 32];
    left.clone_from_slice(&bytes[0..32]);
    right.clone_from_slice(&bytes[32..64]);
    (left, right)
}

pub(crate) fn mk_xprv(out: &mut [u8; XPRV_SIZE], kl: &[u8; 32], kr: &[u8; 32], cc: &ChainCode) {
    out[0..32].clone_from_slice(kl);
    out[32..64].clone_from_slice(kr);
    out[64..96].clone_from_slice(cc);
}

pub(crate) fn mk_xpub(out: &mut [u8; XPUB_SIZE], pk: &[u8; PUBLIC_KEY_SIZE], cc: &ChainCode) {
    out[0..32].clone_from_slice(pk);
    out[32..64].clone_from_slice(cc);
}

pub(crate) fn mk_public_key<C: CurveOps>(kl: &[u8; 32]) -> [u8; PUBLIC_KEY_SIZE] {
    C::point_encode(&C::scalar_base_multiply(kl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_too_short() {
        assert_eq!(
            Seed::from_slice(&[1u8; 31]).unwrap_err(),
            Error::InvalidLength {
                expected: SEED_MIN_SIZE,
                received: 31
            }
        );
    }

    #[test]
    fn root_key_is_clamped() {
        for fill in 0u8..=255 {
            let seed = Seed::from_slice(&[fill; 40]).unwrap();
            let xprv = XPrv::generate_from_seed(&seed);
            let bytes = xprv.to_bytes();
            assert_eq!(bytes[0] & 0b0000_0111, 0);
            assert_eq!(bytes[31] & 0b1110_0000, 0b0100_0000);
            assert!(XPrv::from_bytes_verified(bytes).is_ok());
        }
    }

    #[test]
    fn key_material_ignores_seed_after_32_bytes() {
        let mut long = [7u8; 64];
        let short = XPrv::generate_from_seed(&Seed::from_slice(&long[0..32]).unwrap());
        long[40] = 8;
        let full = XPrv::generate_from_seed(&Seed::from_slice(&long).unwrap());
        assert_eq!(
            &short.extended_secret_key()[..],
            &full.extended_secret_key()[..]
        );
        assert_ne!(short.chain_code(), full.chain_code());
    }

    #[test]
    fn xprv_length_and_encoding_checks() {
        assert_eq!(
            XPrv::from_slice_verified(&[0u8; 95]).unwrap_err(),
            Error::InvalidLength {
                expected: XPRV_SIZE,
                received: 95
            }
        );

        let mut bytes = [0u8; XPRV_SIZE];
        bytes[31] = 0b0100_0000;
        assert!(XPrv::from_bytes_verified(bytes).is_ok());

        bytes[0] = 0b0000_0001;
        assert!(XPrv::from_bytes_verified(bytes).is_err());
        bytes[0] = 0;

        bytes[31] = 0b1100_0000;
        assert!(XPrv::from_bytes_verified(bytes).is_err());
        bytes[31] = 0b0000_0000;
        assert!(XPrv::from_bytes_verified(bytes).is_err());

        // the third bit may come from derivation
        bytes[31] = 0b0110_0000;
        let xprv = XPrv::from_bytes_verified(bytes).unwrap();
        assert!(!xprv.is_3rd_highest_bit_clear());
    }

    #[test]
    fn normalize_bytes_is_verified() {
        let xprv = XPrv::normalize_bytes([0xff; XPRV_SIZE]);
        assert!(xprv.is_3rd_highest_bit_clear());
        assert!(XPrv::from_bytes_verified(xprv.to_bytes()).is_ok());
    }

    #[test]
    fn xpub_accessors_are_copies() {
        let mut raw = [0u8; XPUB_SIZE];
        raw[32..].clone_from_slice(&[9u8; 32]);
        let xpub = XPub::from_slice(&raw).unwrap();

        let mut bytes = xpub.to_bytes();
        bytes[0] = 1;
        assert_eq!(xpub.as_ref()[0], 0);
        assert_eq!(xpub.public_key(), [0u8; 32]);
        assert_eq!(xpub.chain_code(), [9u8; 32]);

        assert_eq!(
            XPub::from_slice(&[]).unwrap_err(),
            Error::InvalidLength {
                expected: XPUB_SIZE,
                received: 0
            }
        );
    }

    #[test]
    fn xpub_with_invalid_point_does_not_verify() {
        let mut raw = [0u8; XPUB_SIZE];
        raw[0] = 2;
        let xpub = XPub::from_bytes(raw);
        let signature: Signature<()> = Signature::from_bytes([0u8; 64]);
        assert!(!xpub.verify(b"", &signature));
    }

    #[test]
    fn hex_roundtrip() {
        let seed = Seed::from_slice(&[3u8; 32]).unwrap();
        let xprv = XPrv::generate_from_seed(&seed);
        assert_eq!(XPrv::from_hex(&xprv.to_string()).unwrap(), xprv);
        let xpub = xprv.public();
        assert_eq!(XPub::from_hex(&format!("{}", xpub)).unwrap(), xpub);
        assert!(XPub::from_hex("zz").is_err());
    }
}
