use super::{
    INITIAL_FILL, NcodeClass, PLACEHOLDER, Parts, SYLLABLE_FIRST, SYLLABLE_LAST, Syllable,
    VOWEL_FILL, classify, encode, encode_str, encode_str_into, is_hangul, is_jamo, is_syllable,
};

#[test]
fn ga_has_no_final_byte() {
    assert_eq!(encode(0xAC00).as_bytes(), &[0xA2, 0xB6]);
}

#[test]
fn gak_has_final_byte() {
    assert_eq!(encode(0xAC01).as_bytes(), &[0xA2, 0xB6, 0xCB]);
}

#[test]
fn last_syllable_uses_last_codes() {
    // U+D7A3 "힣": initial 18, vowel 20, final 27.
    assert_eq!(encode(SYLLABLE_LAST).as_bytes(), &[0xB4, 0xCA, 0xE5]);
}

#[test]
fn han_decomposes() {
    // U+D55C "한" = ㅎ + ㅏ + ㄴ.
    let s = Syllable::from_codepoint(0xD55C).unwrap();
    assert_eq!(
        s,
        Syllable {
            initial: 18,
            vowel: 0,
            final_index: 4
        }
    );
    assert_eq!(s.codes().as_bytes(), &[0xB4, 0xB6, 0xCE]);
}

#[test]
fn every_syllable_round_trips_through_codes() {
    for cp in SYLLABLE_FIRST..=SYLLABLE_LAST {
        let s = Syllable::from_codepoint(cp).unwrap();
        let codes = s.codes();
        assert_eq!(codes.len(), if s.has_final() { 3 } else { 2 });
        let back = Syllable::from_codes(&codes).unwrap();
        assert_eq!(back, s);
        let rebuilt = u32::from(back.initial) * 588
            + u32::from(back.vowel) * 28
            + u32::from(back.final_index);
        assert_eq!(rebuilt + 44032, cp);
        assert_eq!(back.to_codepoint(), cp);
    }
}

#[test]
fn syllable_range_bounds() {
    assert!(!is_syllable(SYLLABLE_FIRST - 1));
    assert!(is_syllable(SYLLABLE_FIRST));
    assert!(is_syllable(SYLLABLE_LAST));
    assert!(!is_syllable(SYLLABLE_LAST + 1));
    assert!(Syllable::from_codepoint(0x41).is_none());
}

#[test]
fn bare_initial_jamo() {
    assert_eq!(encode(0x1100).as_bytes(), &[0xA2]);
    assert_eq!(encode(0x1112).as_bytes(), &[0xB4]);
}

#[test]
fn bare_vowel_jamo_gets_initial_fill() {
    assert_eq!(encode(0x1161).as_bytes(), &[INITIAL_FILL, 0xB6]);
    assert_eq!(encode(0x1175).as_bytes(), &[INITIAL_FILL, 0xCA]);
}

#[test]
fn bare_final_jamo_gets_both_fills() {
    assert_eq!(encode(0x11A8).as_bytes(), &[INITIAL_FILL, VOWEL_FILL, 0xCB]);
    assert_eq!(encode(0x11C2).as_bytes(), &[INITIAL_FILL, VOWEL_FILL, 0xE5]);
}

#[test]
fn jamo_range_edges_are_exclusive() {
    assert!(is_jamo(0x1112));
    assert!(!is_jamo(0x1113));
    assert!(!is_jamo(0x1160));
    assert!(!is_jamo(0x1176));
    assert!(!is_jamo(0x11A7));
    assert!(!is_jamo(0x11C3));
    assert!(is_hangul(0x11A8));
    assert!(is_hangul(0xAC00));
    assert!(!is_hangul(0x41));
}

#[test]
fn ascii_passes_through() {
    assert_eq!(encode(u32::from(b'A')).as_bytes(), b"A");
    assert_eq!(encode(u32::from(b'\n')).as_bytes(), b"\n");
    assert_eq!(encode(0x7F).as_bytes(), &[0x7F]);
}

#[test]
fn unmapped_becomes_placeholder() {
    assert_eq!(encode(0).as_bytes(), &[PLACEHOLDER]);
    assert_eq!(encode(0xE9).as_bytes(), &[PLACEHOLDER]);
    assert_eq!(encode(0x1F600).as_bytes(), &[PLACEHOLDER]);
}

#[test]
fn sequence_components_skip_fillers() {
    let vowel_only = encode(0x1161);
    assert_eq!(vowel_only.parts(), Parts::VOWEL);
    assert_eq!(vowel_only.components().collect::<Vec<_>>(), [(Parts::VOWEL, 0xB6)]);

    let final_only = encode(0x11A8);
    assert_eq!(final_only.components().collect::<Vec<_>>(), [(Parts::FINAL, 0xCB)]);

    let full = encode(0xAC01);
    assert_eq!(full.parts(), Parts::INITIAL | Parts::VOWEL | Parts::FINAL);
    assert_eq!(
        full.components().collect::<Vec<_>>(),
        [(Parts::INITIAL, 0xA2), (Parts::VOWEL, 0xB6), (Parts::FINAL, 0xCB)]
    );

    assert!(encode(u32::from(b'x')).parts().is_empty());
    assert_eq!(encode(u32::from(b'x')).components().count(), 0);
}

#[test]
fn part_of_code_and_slot() {
    assert_eq!(Parts::of(0xA2), Some(Parts::INITIAL));
    assert_eq!(Parts::of(0xCA), Some(Parts::VOWEL));
    assert_eq!(Parts::of(0xE5), Some(Parts::FINAL));
    assert_eq!(Parts::of(INITIAL_FILL), None);
    assert_eq!(Parts::of(VOWEL_FILL), None);
    assert_eq!(Parts::of(b'A'), None);
    assert_eq!(Parts::INITIAL.slot(), 0);
    assert_eq!(Parts::VOWEL.slot(), 1);
    assert_eq!(Parts::FINAL.slot(), 2);
}

#[test]
fn classify_bands() {
    assert_eq!(classify(b'a'), NcodeClass::Ascii);
    assert_eq!(classify(0xA1), NcodeClass::InitialFill);
    assert_eq!(classify(0xA2), NcodeClass::Initial(0));
    assert_eq!(classify(0xB4), NcodeClass::Initial(18));
    assert_eq!(classify(0xB5), NcodeClass::VowelFill);
    assert_eq!(classify(0xB6), NcodeClass::Vowel(0));
    assert_eq!(classify(0xCA), NcodeClass::Vowel(20));
    assert_eq!(classify(0xCB), NcodeClass::Final(1));
    assert_eq!(classify(0xE5), NcodeClass::Final(27));
    assert_eq!(classify(0xE6), NcodeClass::Unassigned);
    assert_eq!(classify(0xA0), NcodeClass::Unassigned);
    assert_eq!(classify(0), NcodeClass::Unassigned);
}

#[test]
fn from_codes_rejects_fillers_and_bad_order() {
    assert!(Syllable::from_codes(&[INITIAL_FILL, 0xB6]).is_none());
    assert!(Syllable::from_codes(&[0xA2, VOWEL_FILL]).is_none());
    assert!(Syllable::from_codes(&[0xB6, 0xA2]).is_none());
    assert!(Syllable::from_codes(&[0xA2, 0xB6, 0xB6]).is_none());
    assert!(Syllable::from_codes(&[0xA2]).is_none());
}

#[test]
fn encode_str_mixes_ascii_and_hangul() {
    assert_eq!(
        encode_str("A가각".as_bytes()),
        vec![b'A', 0xA2, 0xB6, 0xA2, 0xB6, 0xCB]
    );
}

#[test]
fn encode_str_into_terminates() {
    let mut buf = [0xEE; 8];
    let n = encode_str_into("가A".as_bytes(), &mut buf);
    assert_eq!(n, 3);
    assert_eq!(&buf[..4], &[0xA2, 0xB6, b'A', 0]);
}

#[test]
fn encode_str_into_never_splits_a_character() {
    // "각" needs 3 bytes; only 2 remain before the terminator slot.
    let mut buf = [0xEE; 4];
    let n = encode_str_into("A각".as_bytes(), &mut buf);
    assert_eq!(n, 1);
    assert_eq!(&buf, &[b'A', 0, 0xEE, 0xEE]);
}

#[test]
fn encode_str_into_exact_fit() {
    let mut buf = [0xEE; 4];
    let n = encode_str_into("각".as_bytes(), &mut buf);
    assert_eq!(n, 3);
    assert_eq!(&buf, &[0xA2, 0xB6, 0xCB, 0]);
}

#[test]
fn encode_str_into_tiny_buffers() {
    let mut empty: [u8; 0] = [];
    assert_eq!(encode_str_into(b"abc", &mut empty), 0);

    let mut one = [0xEE; 1];
    assert_eq!(encode_str_into(b"abc", &mut one), 0);
    assert_eq!(one, [0]);
}
