//! Fixed width little-endian additions used to combine a parent key
//! with the output of the derivation HMAC.

/// `x + 8 * trunc28(y)`
///
/// Only the 28 lowest bytes of `y` are multiplied and added, the 4 highest
/// bytes of `x` only receive the carry. This truncation is part of the
/// derivation scheme and keeps the child scalar under 2^255 for any depth
/// under 2^20.
pub fn add_28_mul8(x: &[u8; 32], y: &[u8; 32]) -> [u8; 32] {
    let mut carry: u16 = 0;
    let mut out = [0u8; 32];

    for i in 0..28 {
        let r = x[i] as u16 + ((y[i] as u16) << 3) + carry;
        out[i] = (r & 0xff) as u8;
        carry = r >> 8;
    }
    for i in 28..32 {
        let r = x[i] as u16 + carry;
        out[i] = (r & 0xff) as u8;
        carry = r >> 8;
    }
    out
}

/// `x + y mod 2^256`
pub fn add_256bits(x: &[u8; 32], y: &[u8; 32]) -> [u8; 32] {
    let mut carry: u16 = 0;
    let mut out = [0u8; 32];
    for i in 0..32 {
        let r = (x[i] as u16) + (y[i] as u16) + carry;
        out[i] = r as u8;
        carry = r >> 8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex;

    fn array32(s: &str) -> [u8; 32] {
        let v = hex::decode(s).unwrap();
        let mut out = [0u8; 32];
        out.copy_from_slice(&v);
        out
    }

    const X: &str = "b9d2ad48d44954b409f674a306c08da5b7e1c52005a512f5854c2593173db4a6";
    const Y: &str = "1d9b4170ef340b683ddf03f847b1c1aeb8d276e271446c52c9fbd324a3fa8206";

    #[test]
    fn add_28_mul8_vector() {
        let r = add_28_mul8(&array32(X), &array32(Y));
        assert_eq!(
            hex::encode(&r),
            "a1abbaca4ff1adf4f4ef9363464a9b1b7d777c3494c87488d02ac5b9183db4a6"
        );
    }

    #[test]
    fn add_256bits_vector() {
        let r = add_256bits(&array32(X), &array32(Y));
        assert_eq!(
            hex::encode(&r),
            "d66defb8c37e5f1c47d5789b4e714f5470b43c0377e97e474f48f9b7ba3737ad"
        );
    }

    #[test]
    fn add_28_mul8_ignores_high_bytes_of_y() {
        let x = [0u8; 32];
        let mut y = [0u8; 32];
        y[28..].copy_from_slice(&[0xff; 4]);
        assert_eq!(add_28_mul8(&x, &y), [0u8; 32]);
    }

    #[test]
    fn add_28_mul8_carries_into_high_bytes() {
        let mut x = [0u8; 32];
        x[27] = 0xff;
        let mut y = [0u8; 32];
        y[27] = 0x01;
        let r = add_28_mul8(&x, &y);
        // 0xff + (1 << 3) = 0x107
        assert_eq!(r[27], 0x07);
        assert_eq!(r[28], 0x01);
        assert_eq!(&r[29..], &[0u8; 3]);
    }

    #[test]
    fn add_256bits_wraps() {
        let x = [0xff; 32];
        let mut y = [0u8; 32];
        y[0] = 1;
        assert_eq!(add_256bits(&x, &y), [0u8; 32]);
    }
}
