use super::*;

fn root() -> XPrv {
    let seed = Seed::from_slice(&[0; SEED_MIN_SIZE]).unwrap();
    XPrv::generate_from_seed(&seed)
}

#[bench]
fn derivate_hard(b: &mut test::Bencher) {
    let sk = root();
    b.iter(|| {
        let _ = sk.derive(0x80000000);
    })
}

#[bench]
fn derivate_soft_xprv(b: &mut test::Bencher) {
    let sk = root();
    b.iter(|| {
        let _ = sk.derive(0);
    })
}

#[bench]
fn derivate_soft_xpub(b: &mut test::Bencher) {
    let pk = root().public();
    b.iter(|| {
        let _ = pk.derive(0);
    })
}

#[bench]
fn sign(b: &mut test::Bencher) {
    let sk = root();
    b.iter(|| {
        let _: Signature<()> = sk.sign(b"Hello World");
    })
}
