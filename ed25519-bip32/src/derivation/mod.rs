//! Child key derivation
//!
//! hardened child (needs the private key):
//!
//! ```text
//! Z = HMAC-SHA512(Key = c, Data = 0x00 || kL || kR || le32(i))
//! I = HMAC-SHA512(Key = c, Data = 0x01 || kL || kR || le32(i))
//! ```
//!
//! soft child (computable from the public key):
//!
//! ```text
//! Z = HMAC-SHA512(Key = c, Data = 0x02 || A || le32(i))
//! I = HMAC-SHA512(Key = c, Data = 0x03 || A || le32(i))
//! ```
//!
//! then `kL' = kL + 8 * trunc28(ZL)`, `kR' = kR + ZR mod 2^256`,
//! `A' = A + [8 * trunc28(ZL)]B` and `c' = right(I)`.

mod common;
mod path;

pub use self::common::{DerivationIndex, DerivationType, HARDENED_BOUNDARY};
pub use self::path::{DerivationPath, PathError};

use self::common::le32;
use crate::arithmetic::{add_256bits, add_28_mul8};
use crate::curve::{point_of_trunc28_mul8, CurveOps};
use crate::error::{Error, Result};
use crate::key::{halves, mk_public_key, mk_xprv, mk_xpub, XPrv, XPub, XPRV_SIZE, XPUB_SIZE};
use crate::securemem;
use cryptoxide::hmac::Hmac;
use cryptoxide::mac::Mac;
use cryptoxide::sha2::Sha512;
use log::{debug, trace};

fn hmac_sha512(key: &[u8], tag: u8, payload: &[u8], index: &[u8; 4]) -> [u8; 64] {
    let mut mac = Hmac::new(Sha512::new(), key);
    mac.input(&[tag]);
    mac.input(payload);
    mac.input(index);
    let mut out = [0u8; 64];
    mac.raw_result(&mut out);
    out
}

pub(crate) fn private<C: CurveOps>(xprv: &XPrv, index: DerivationIndex) -> XPrv {
    let derivation = DerivationType::from_index(index);
    trace!("private derivation: {:?}", derivation);

    let (z_tag, i_tag) = derivation.tags();
    let seri = le32(index);
    let chain_code = xprv.chain_code();
    let mut ekey = xprv.extended_secret_key();
    let (mut kl, mut kr) = halves(&ekey);

    let (mut zout, iout) = match derivation {
        DerivationType::Soft(_) => {
            let pk = mk_public_key::<C>(&kl);
            (
                hmac_sha512(&chain_code, z_tag, &pk, &seri),
                hmac_sha512(&chain_code, i_tag, &pk, &seri),
            )
        }
        DerivationType::Hard(_) => (
            hmac_sha512(&chain_code, z_tag, &ekey, &seri),
            hmac_sha512(&chain_code, i_tag, &ekey, &seri),
        ),
    };
    let (mut zl, mut zr) = halves(&zout);
    let (_, cc) = halves(&iout);

    // left = kl + 8 * trunc28(zl)
    let left = add_28_mul8(&kl, &zl);
    // right = zr + kr
    let right = add_256bits(&kr, &zr);

    let mut out = [0u8; XPRV_SIZE];
    mk_xprv(&mut out, &left, &right, &cc);

    securemem::zero(&mut kl);
    securemem::zero(&mut kr);
    securemem::zero(&mut zl);
    securemem::zero(&mut zr);
    securemem::zero(&mut ekey);
    securemem::zero(&mut zout);

    XPrv::from_bytes(out)
}

pub(crate) fn public<C: CurveOps>(xpub: &XPub, index: DerivationIndex) -> Result<XPub> {
    let derivation = DerivationType::from_index(index);
    if derivation.is_hard() {
        debug!("public derivation rejected: {:?}", derivation);
        return Err(Error::NotSoftDerivable(index));
    }
    trace!("public derivation: {:?}", derivation);

    let (z_tag, i_tag) = derivation.tags();
    let seri = le32(index);
    let pk = xpub.public_key();
    let chain_code = xpub.chain_code();

    let zout = hmac_sha512(&chain_code, z_tag, &pk, &seri);
    let iout = hmac_sha512(&chain_code, i_tag, &pk, &seri);
    let (zl, _zr) = halves(&zout);
    let (_, cc) = halves(&iout);

    // A' = A + [8 * trunc28(zl)]B
    let zl8 = point_of_trunc28_mul8::<C>(&zl);
    let a = match C::point_decode(&pk) {
        Some(a) => a,
        None => {
            debug!("public derivation failed: parent public key is not a point");
            return Err(Error::InvalidPoint);
        }
    };
    let child = C::point_encode(&C::point_add(&a, &zl8));

    let mut out = [0u8; XPUB_SIZE];
    mk_xpub(&mut out, &child, &cc);
    Ok(XPub::from_bytes(out))
}
