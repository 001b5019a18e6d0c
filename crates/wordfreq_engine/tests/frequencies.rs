use pretty_assertions::assert_eq;
use wordfreq_engine::{calculate_frequencies, segment, total_occurrences, WordCount};

fn pairs(list: &[WordCount]) -> Vec<(&str, u32)> {
    list.iter()
        .map(|entry| (entry.word.as_str(), entry.count))
        .collect()
}

#[test]
fn repeated_word_counts() {
    let list = calculate_frequencies("hello world hello");
    assert_eq!(pairs(&list), vec![("hello", 2), ("world", 1)]);
}

#[test]
fn case_and_punctuation_fold_and_ties_keep_first_seen_order() {
    let list = calculate_frequencies("Hello, world! hello. World?");
    assert_eq!(pairs(&list), vec![("hello", 2), ("world", 2)]);
}

#[test]
fn contractions_collapse() {
    let list = calculate_frequencies("It's a great day! That's why it's important.");
    assert_eq!(
        pairs(&list),
        vec![
            ("its", 2),
            ("a", 1),
            ("great", 1),
            ("day", 1),
            ("thats", 1),
            ("why", 1),
            ("important", 1),
        ]
    );
}

#[test]
fn empty_input_is_empty_list() {
    assert!(calculate_frequencies("").is_empty());
    assert!(calculate_frequencies("   \n\t ").is_empty());
    assert!(calculate_frequencies("#$% ^&*").is_empty());
}

#[test]
fn separators_between_repeats() {
    let list = calculate_frequencies("test. test:  test/   test.");
    assert_eq!(pairs(&list), vec![("test", 4)]);
}

#[test]
fn numbers_count_as_words() {
    let list = calculate_frequencies("word1 word2 123 word1 #$% hello. hello.");
    assert_eq!(
        pairs(&list),
        vec![("word1", 2), ("hello", 2), ("word2", 1), ("123", 1)]
    );
}

#[test]
fn symbols_inside_a_run_join_the_pieces() {
    let list = calculate_frequencies("  #$%^&* @(*  @#$  test#@*test  test");
    assert_eq!(pairs(&list), vec![("testtest", 1), ("test", 1)]);
}

#[test]
fn hyphenated_compounds_collapse() {
    let list = calculate_frequencies("Well-being and mother-in-law are important.");
    assert_eq!(
        pairs(&list),
        vec![
            ("wellbeing", 1),
            ("and", 1),
            ("motherinlaw", 1),
            ("are", 1),
            ("important", 1),
        ]
    );
}

#[test]
fn substrings_are_distinct_words() {
    let list = calculate_frequencies("useful use usage user used useful useful use");
    assert_eq!(
        pairs(&list),
        vec![
            ("useful", 3),
            ("use", 2),
            ("usage", 1),
            ("user", 1),
            ("used", 1),
        ]
    );
}

#[test]
fn cyrillic_text() {
    let list = calculate_frequencies("Привет, мир! Привет. Как дела?");
    assert_eq!(
        pairs(&list),
        vec![("привет", 2), ("мир", 1), ("как", 1), ("дела", 1)]
    );
}

#[test]
fn accented_latin_text() {
    let list = calculate_frequencies("Hola, mundo! Hola. ¿Qué tal?");
    assert_eq!(
        pairs(&list),
        vec![("hola", 2), ("mundo", 1), ("qué", 1), ("tal", 1)]
    );

    let list = calculate_frequencies("C'est une journée magnifique. L'année commence bien!");
    assert_eq!(
        pairs(&list),
        vec![
            ("cest", 1),
            ("une", 1),
            ("journée", 1),
            ("magnifique", 1),
            ("lannée", 1),
            ("commence", 1),
            ("bien", 1),
        ]
    );
}

#[test]
fn greek_text() {
    let list = calculate_frequencies("Γειά σου κόσμε! Ελπίζω να έχεις μια όμορφη μέρα.");
    assert_eq!(
        pairs(&list),
        vec![
            ("γειά", 1),
            ("σου", 1),
            ("κόσμε", 1),
            ("ελπίζω", 1),
            ("να", 1),
            ("έχεις", 1),
            ("μια", 1),
            ("όμορφη", 1),
            ("μέρα", 1),
        ]
    );
}

#[test]
fn hangul_is_split_on_spaces() {
    let list = calculate_frequencies("안녕하세요, 세계! 좋은 하루 보내세요. 그리고, 나중에 봐요.");
    assert_eq!(
        pairs(&list),
        vec![
            ("안녕하세요", 1),
            ("세계", 1),
            ("좋은", 1),
            ("하루", 1),
            ("보내세요", 1),
            ("그리고", 1),
            ("나중에", 1),
            ("봐요", 1),
        ]
    );
}

#[test]
fn mixed_scripts() {
    let list = calculate_frequencies("你好 world! Привет test? Hola 123.");
    assert_eq!(
        pairs(&list),
        vec![
            ("你好", 1),
            ("world", 1),
            ("привет", 1),
            ("test", 1),
            ("hola", 1),
            ("123", 1),
        ]
    );
}

#[test]
fn chinese_run_stays_a_single_token() {
    let list = calculate_frequencies("你好！世界，你好。你好嗎？123你好");
    assert_eq!(pairs(&list), vec![("你好世界你好你好嗎123你好", 1)]);
}

#[test]
fn japanese_run_stays_a_single_token() {
    let list = calculate_frequencies("こんにちは、世界！良い一日を。そして、またね123。こんにちは");
    assert_eq!(
        pairs(&list),
        vec![("こんにちは世界良い一日をそしてまたね123こんにちは", 1)]
    );
}

#[test]
fn thai_splits_only_on_spaces_and_loses_vowel_marks() {
    let list = calculate_frequencies("สวัสดีชาวโลก! ขอให้มีวันที่ดี แล้วพบกันใหม่นะ๑๒๓สวัสดี");
    assert_eq!(
        pairs(&list),
        vec![
            ("สวสดชาวโลก", 1),
            ("ขอใหมวนทด", 1),
            ("แลวพบกนใหมนะ๑๒๓สวสด", 1),
        ]
    );
}

#[test]
fn burmese_splits_only_on_spaces_and_loses_signs() {
    let list = calculate_frequencies("မင်္ဂလာပါကမ္ဘာ! သင်သည်ကောင်းသောနေ့ဖြစ်ပါစေသော။ နောက်မှတွေ့မယ်၁၂၃မင်္ဂလာပါ");
    assert_eq!(
        pairs(&list),
        vec![
            ("မငဂလပကမဘ", 1),
            ("သငသညကငသနဖစပစသ", 1),
            ("နကမတမယ၁၂၃မငဂလပ", 1),
        ]
    );
}

#[test]
fn devanagari_loses_combining_signs() {
    let list =
        calculate_frequencies("नमस्ते दुनिया! आपका दिन शुभ हो। और, जल्द ही मिलते हैं१२३।नमस्ते");
    assert_eq!(
        pairs(&list),
        vec![
            ("ह", 2),
            ("नमसत", 1),
            ("दनय", 1),
            ("आपक", 1),
            ("दन", 1),
            ("शभ", 1),
            ("और", 1),
            ("जलद", 1),
            ("मलत", 1),
            ("ह१२३नमसत", 1),
        ]
    );
}

#[test]
fn tamil_splits_only_on_spaces() {
    let list = calculate_frequencies(
        "வணக்கம் உலகமே! உங்களுக்கு ஒரு நல்ல நாள் அமையட்டும். பிறகு சந்திப்போம்௧௨௩வணக்கம்",
    );
    assert_eq!(
        pairs(&list),
        vec![
            ("வணககம", 1),
            ("உலகம", 1),
            ("உஙகளகக", 1),
            ("ஒர", 1),
            ("நலல", 1),
            ("நள", 1),
            ("அமயடடம", 1),
            ("பறக", 1),
            ("சநதபபம௧௨௩வணககம", 1),
        ]
    );
}

#[test]
fn counts_sum_to_token_count() {
    let samples = [
        "",
        "a a a",
        "Hello, world! hello. World?",
        "mixed 你好 text, 123 and more; more!",
        "  ~!@#$ word1 word2 %^&* ",
    ];
    for text in samples {
        let list = calculate_frequencies(text);
        assert_eq!(total_occurrences(&list), segment(text).len() as u64, "{text:?}");
    }
}

#[test]
fn calculation_is_idempotent() {
    let text = "b a b c a d — and again: b!";
    assert_eq!(calculate_frequencies(text), calculate_frequencies(text));
}

#[test]
fn equal_counts_keep_first_occurrence_order() {
    let list = calculate_frequencies("zeta alpha mid zeta alpha mid omega");
    assert_eq!(
        pairs(&list),
        vec![("zeta", 2), ("alpha", 2), ("mid", 2), ("omega", 1)]
    );
}
