use eots::{Nonce, SigningKey, VerifyingKey, extract, hash_message, hex};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    // An honest signer uses the derived nonce
    let digest = hash_message(b"hello eots");
    let sig = sk.sign(&digest, None).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2 = bincode::deserialize(&sig_bytes).expect("deserialize sig");
    assert!(vk2.verify(&digest, &sig2));

    // An equivocating signer commits to one nonce and signs two conflicting messages
    let nonce = Nonce::random(&mut rng);
    let h1 = hash_message(b"height 7: block A");
    let h2 = hash_message(b"height 7: block B");
    let a = sk2.sign(&h1, Some(&nonce)).expect("sign");
    let b = sk2.sign(&h2, Some(&nonce)).expect("sign");

    let recovered = extract(&a, &b, &h1, &h2).expect("extract");
    assert_eq!(recovered, sk);
    println!("public key:    {}", hex::encode(&vk.to_bytes()));
    println!("recovered key: {}", hex::encode(&recovered.to_bytes()));
}
