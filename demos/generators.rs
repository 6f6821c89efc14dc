fn main() {
    // filter generator: one 16-bit register
    let filtered = keystream::filter_generator(
        "1101111011010011",
        "x2+x4+x7+x12",
        "x1*x4+x5*x7+x11",
        128,
    )
    .expect("filter generator");
    println!("filter:    {}", filtered);

    // combining generator with 3 registers
    let seeds = ["0010010110110101", "1101001001000111", "1001010110001011"];
    let taps = ["x1+x2+x3", "x1+x3+x5+x7+x8", "x1+x4"];
    let combined =
        keystream::combining_generator(&seeds, &taps, "x1*x3", 128).expect("combining generator");
    println!("combining: {}", combined);

    let msg = "0110100001100101011011000110110001101111";
    let ks = &filtered[..msg.len()];
    let ct = keystream::xor_bits(msg, ks).expect("encrypt");
    println!("ciphertext: {}", ct);

    let pt = keystream::xor_bits(&ct, ks).expect("decrypt");
    assert_eq!(pt, msg);
    println!("decrypted ok");
}
