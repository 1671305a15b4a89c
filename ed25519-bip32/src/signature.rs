use crate::curve::{CurveOps, SCALAR_SIZE};
use crate::error::{Error, Result};
use crate::hex;
use crate::securemem;
use cryptoxide::digest::Digest;
use cryptoxide::sha2::Sha512;
use cryptoxide::util::fixed_time_eq;
use std::fmt;
use std::marker::PhantomData;

pub const SIGNATURE_SIZE: usize = 64;

/// `l - 1`, multiplying by it negates a scalar
const ORDER_MINUS_ONE: [u8; SCALAR_SIZE] = [
    0xec, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// a signature with an associated type tag
///
#[derive(Clone)]
pub struct Signature<T> {
    bytes: [u8; SIGNATURE_SIZE],
    _phantom: PhantomData<T>,
}
impl<T> Signature<T> {
    pub fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Signature {
            bytes,
            _phantom: PhantomData,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(Error::InvalidLength {
                expected: SIGNATURE_SIZE,
                received: bytes.len(),
            });
        }
        let mut buf = [0u8; SIGNATURE_SIZE];
        buf[..].clone_from_slice(bytes);
        Ok(Self::from_bytes(buf))
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::decode(hex)?;
        Self::from_slice(&bytes)
    }

    pub fn coerce<R>(self) -> Signature<R> {
        Signature::<R>::from_bytes(self.bytes)
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.bytes
    }
}
impl<T> PartialEq for Signature<T> {
    fn eq(&self, rhs: &Signature<T>) -> bool {
        fixed_time_eq(self.as_ref(), rhs.as_ref())
    }
}
impl<T> Eq for Signature<T> {}
impl<T> fmt::Display for Signature<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl<T> fmt::Debug for Signature<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.as_ref()))
    }
}
impl<T> AsRef<[u8]> for Signature<T> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

fn sha512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.input(part);
    }
    let mut out = [0u8; 64];
    hasher.result(&mut out);
    out
}

/// Ed25519 signature with an extended secret key.
///
/// The nonce is taken from `kR` instead of the hash of the secret key: `kL`
/// is the result of the derivation arithmetic, not of a hash.
pub(crate) fn sign<C: CurveOps>(
    kl: &[u8; SCALAR_SIZE],
    kr: &[u8; SCALAR_SIZE],
    public_key: &[u8; 32],
    message: &[u8],
) -> [u8; SIGNATURE_SIZE] {
    let mut nonce_hash = sha512(&[&kr[..], message]);
    let mut nonce = C::reduce_mod_order(&nonce_hash);
    let r = C::point_encode(&C::scalar_base_multiply(&nonce));

    let k = C::reduce_mod_order(&sha512(&[&r[..], &public_key[..], message]));
    let s = C::scalar_multiply_add(&k, kl, &nonce);

    securemem::zero(&mut nonce_hash);
    securemem::zero(&mut nonce);

    let mut signature = [0u8; SIGNATURE_SIZE];
    signature[0..32].clone_from_slice(&r);
    signature[32..64].clone_from_slice(&s);
    signature
}

/// Standard Ed25519 verification: `encode([s]B - [k]A) == r`
///
/// `s` must be fully reduced, otherwise `s + l` would verify as well.
pub(crate) fn verify<C: CurveOps>(
    public_key: &[u8; 32],
    message: &[u8],
    signature: &[u8; SIGNATURE_SIZE],
) -> bool {
    let mut r = [0u8; 32];
    let mut s = [0u8; SCALAR_SIZE];
    r.clone_from_slice(&signature[0..32]);
    s.clone_from_slice(&signature[32..64]);

    if !C::scalar_is_canonical(&s) {
        return false;
    }
    let a = match C::point_decode(public_key) {
        Some(a) => a,
        None => return false,
    };

    let k = C::reduce_mod_order(&sha512(&[&r[..], &public_key[..], message]));
    let minus_k = C::scalar_multiply_add(&k, &ORDER_MINUS_ONE, &[0u8; SCALAR_SIZE]);
    let check = C::point_encode(&C::double_scalar_multiply(&minus_k, &a, &s));

    fixed_time_eq(&check, &r)
}
