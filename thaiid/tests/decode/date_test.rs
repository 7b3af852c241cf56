use thaiid::decode::{CardDate, Gender, decode_date};

fn pair(th: &str, en: &str) -> (String, String) {
    (th.to_string(), en.to_string())
}

#[test]
fn buddhist_dates() {
    assert_eq!(
        decode_date("25680101"),
        pair("1 มกราคม 2568", "1 January 2025")
    );
    assert_eq!(
        decode_date("25430229"),
        pair("29 กุมภาพันธ์ 2543", "29 February 2000")
    );
}

#[test]
fn sentinels() {
    assert_eq!(decode_date("99999999"), pair("ตลอดชีพ", "LIFELONG"));
    for raw in ["25681301", "2568010", "", "25x80101"] {
        assert_eq!(decode_date(raw), pair("ไม่ระบุ", "Not specified"), "{raw:?}");
    }
}

#[test]
fn short_export_form() {
    assert_eq!(CardDate::parse("25300115").short_th(), "15/1/2530");
    assert_eq!(CardDate::parse("99999999").short_th(), "ตลอดชีพ");
}

#[test]
fn gender_codes() {
    assert_eq!(Gender::from_code("1").en(), "Male");
    assert_eq!(Gender::from_code("2").th(), "หญิง");
    assert_eq!(Gender::from_code("9"), Gender::Other("9".into()));
}
