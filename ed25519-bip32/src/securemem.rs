/// zero the given slice.
///
/// We assume the compiler won't optimise out the call to this function
pub fn zero(to_zero: &mut [u8]) {
    // the unsafety of this call is bounded to the existence of the pointer
    // and the accuracy of the length of the array.
    unsafe { ::std::ptr::write_bytes(to_zero.as_mut_ptr(), 0, to_zero.len()) }
}

#[cfg(test)]
mod tests {
    #[test]
    fn zero_clears_every_byte() {
        let mut buf = [0xa5u8; 96];
        super::zero(&mut buf[..]);
        assert!(buf.iter().all(|b| *b == 0));
    }
}
