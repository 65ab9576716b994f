#![no_main]
use elias::{decode, encode, gamma_decode, Alphabet, EncodedDocument, GammaCode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, Vec<Vec<bool>>)| {
    let (text, raw_codes) = data;

    if !text.is_empty() {
        let doc = encode(&text).unwrap();
        assert_eq!(decode(&doc).unwrap(), text);
    }

    // Arbitrary bit strings may fail to decode but must never panic.
    let codes: Vec<GammaCode> = raw_codes
        .into_iter()
        .map(|bits| GammaCode::from_bits(bits.into_iter().map(u8::from).collect()).unwrap())
        .collect();
    for code in &codes {
        let _ = gamma_decode(code);
    }
    let alphabet = Alphabet::from_symbols(vec!['a', 'b', 'c']).unwrap();
    let _ = decode(&EncodedDocument::new(codes, alphabet));
});
