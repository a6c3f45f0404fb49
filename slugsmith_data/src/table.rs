//! Static transliteration data.
//!
//! Entries are kept sorted by code point so lookups can binary search.
//! An empty replacement deletes the character outright.

/// One code point and its ASCII stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslitEntry {
    pub code_point: u32,
    pub ascii: &'static str,
}

impl TranslitEntry {
    pub const fn new(code_point: u32, ascii: &'static str) -> Self {
        Self { code_point, ascii }
    }
}

pub static TRANSLIT_TABLE: [TranslitEntry; 594] = [
    // ASCII and Latin-1 symbols
    TranslitEntry::new(0x0024, "dollar"),
    TranslitEntry::new(0x0025, "percent"),
    TranslitEntry::new(0x0026, "and"),
    TranslitEntry::new(0x003C, "less"),
    TranslitEntry::new(0x003E, "greater"),
    TranslitEntry::new(0x007C, "or"),
    TranslitEntry::new(0x00A2, "cent"), // ¢
    TranslitEntry::new(0x00A3, "pound"), // £
    TranslitEntry::new(0x00A4, "currency"), // ¤
    TranslitEntry::new(0x00A5, "yen"), // ¥
    TranslitEntry::new(0x00A9, "(c)"), // ©
    TranslitEntry::new(0x00AA, "a"), // ª
    TranslitEntry::new(0x00AE, "(r)"), // ®
    TranslitEntry::new(0x00BA, "o"), // º

    // Latin-1 uppercase letters
    TranslitEntry::new(0x00C0, "A"), // À
    TranslitEntry::new(0x00C1, "A"), // Á
    TranslitEntry::new(0x00C2, "A"), // Â
    TranslitEntry::new(0x00C3, "A"), // Ã
    TranslitEntry::new(0x00C4, "A"), // Ä
    TranslitEntry::new(0x00C5, "A"), // Å
    TranslitEntry::new(0x00C6, "AE"), // Æ
    TranslitEntry::new(0x00C7, "C"), // Ç
    TranslitEntry::new(0x00C8, "E"), // È
    TranslitEntry::new(0x00C9, "E"), // É
    TranslitEntry::new(0x00CA, "E"), // Ê
    TranslitEntry::new(0x00CB, "E"), // Ë
    TranslitEntry::new(0x00CC, "I"), // Ì
    TranslitEntry::new(0x00CD, "I"), // Í
    TranslitEntry::new(0x00CE, "I"), // Î
    TranslitEntry::new(0x00CF, "I"), // Ï
    TranslitEntry::new(0x00D0, "D"), // Ð
    TranslitEntry::new(0x00D1, "N"), // Ñ
    TranslitEntry::new(0x00D2, "O"), // Ò
    TranslitEntry::new(0x00D3, "O"), // Ó
    TranslitEntry::new(0x00D4, "O"), // Ô
    TranslitEntry::new(0x00D5, "O"), // Õ
    TranslitEntry::new(0x00D6, "O"), // Ö
    TranslitEntry::new(0x00D8, "O"), // Ø
    TranslitEntry::new(0x00D9, "U"), // Ù
    TranslitEntry::new(0x00DA, "U"), // Ú
    TranslitEntry::new(0x00DB, "U"), // Û
    TranslitEntry::new(0x00DC, "U"), // Ü
    TranslitEntry::new(0x00DD, "Y"), // Ý
    TranslitEntry::new(0x00DE, "TH"), // Þ
    TranslitEntry::new(0x00DF, "ss"), // ß

    // Latin-1 lowercase letters
    TranslitEntry::new(0x00E0, "a"), // à
    TranslitEntry::new(0x00E1, "a"), // á
    TranslitEntry::new(0x00E2, "a"), // â
    TranslitEntry::new(0x00E3, "a"), // ã
    TranslitEntry::new(0x00E4, "a"), // ä
    TranslitEntry::new(0x00E5, "a"), // å
    TranslitEntry::new(0x00E6, "ae"), // æ
    TranslitEntry::new(0x00E7, "c"), // ç
    TranslitEntry::new(0x00E8, "e"), // è
    TranslitEntry::new(0x00E9, "e"), // é
    TranslitEntry::new(0x00EA, "e"), // ê
    TranslitEntry::new(0x00EB, "e"), // ë
    TranslitEntry::new(0x00EC, "i"), // ì
    TranslitEntry::new(0x00ED, "i"), // í
    TranslitEntry::new(0x00EE, "i"), // î
    TranslitEntry::new(0x00EF, "i"), // ï
    TranslitEntry::new(0x00F0, "d"), // ð
    TranslitEntry::new(0x00F1, "n"), // ñ
    TranslitEntry::new(0x00F2, "o"), // ò
    TranslitEntry::new(0x00F3, "o"), // ó
    TranslitEntry::new(0x00F4, "o"), // ô
    TranslitEntry::new(0x00F5, "o"), // õ
    TranslitEntry::new(0x00F6, "o"), // ö
    TranslitEntry::new(0x00F8, "o"), // ø
    TranslitEntry::new(0x00F9, "u"), // ù
    TranslitEntry::new(0x00FA, "u"), // ú
    TranslitEntry::new(0x00FB, "u"), // û
    TranslitEntry::new(0x00FC, "u"), // ü
    TranslitEntry::new(0x00FD, "y"), // ý
    TranslitEntry::new(0x00FE, "th"), // þ
    TranslitEntry::new(0x00FF, "y"), // ÿ

    // Latin Extended-A
    TranslitEntry::new(0x0100, "A"), // Ā
    TranslitEntry::new(0x0101, "a"), // ā
    TranslitEntry::new(0x0102, "A"), // Ă
    TranslitEntry::new(0x0103, "a"), // ă
    TranslitEntry::new(0x0104, "A"), // Ą
    TranslitEntry::new(0x0105, "a"), // ą
    TranslitEntry::new(0x0106, "C"), // Ć
    TranslitEntry::new(0x0107, "c"), // ć
    TranslitEntry::new(0x010C, "C"), // Č
    TranslitEntry::new(0x010D, "c"), // č
    TranslitEntry::new(0x010E, "D"), // Ď
    TranslitEntry::new(0x010F, "d"), // ď
    TranslitEntry::new(0x0110, "DJ"), // Đ
    TranslitEntry::new(0x0111, "dj"), // đ
    TranslitEntry::new(0x0112, "E"), // Ē
    TranslitEntry::new(0x0113, "e"), // ē
    TranslitEntry::new(0x0116, "E"), // Ė
    TranslitEntry::new(0x0117, "e"), // ė
    TranslitEntry::new(0x0118, "e"), // Ę
    TranslitEntry::new(0x0119, "e"), // ę
    TranslitEntry::new(0x011A, "E"), // Ě
    TranslitEntry::new(0x011B, "e"), // ě
    TranslitEntry::new(0x011E, "G"), // Ğ
    TranslitEntry::new(0x011F, "g"), // ğ
    TranslitEntry::new(0x0122, "G"), // Ģ
    TranslitEntry::new(0x0123, "g"), // ģ
    TranslitEntry::new(0x0128, "I"), // Ĩ
    TranslitEntry::new(0x0129, "i"), // ĩ
    TranslitEntry::new(0x012A, "i"), // Ī
    TranslitEntry::new(0x012B, "i"), // ī
    TranslitEntry::new(0x012E, "I"), // Į
    TranslitEntry::new(0x012F, "i"), // į
    TranslitEntry::new(0x0130, "I"), // İ
    TranslitEntry::new(0x0131, "i"), // ı
    TranslitEntry::new(0x0136, "k"), // Ķ
    TranslitEntry::new(0x0137, "k"), // ķ
    TranslitEntry::new(0x013B, "L"), // Ļ
    TranslitEntry::new(0x013C, "l"), // ļ
    TranslitEntry::new(0x013D, "L"), // Ľ
    TranslitEntry::new(0x013E, "l"), // ľ
    TranslitEntry::new(0x0141, "L"), // Ł
    TranslitEntry::new(0x0142, "l"), // ł
    TranslitEntry::new(0x0143, "N"), // Ń
    TranslitEntry::new(0x0144, "n"), // ń
    TranslitEntry::new(0x0145, "N"), // Ņ
    TranslitEntry::new(0x0146, "n"), // ņ
    TranslitEntry::new(0x0147, "N"), // Ň
    TranslitEntry::new(0x0148, "n"), // ň
    TranslitEntry::new(0x014C, "O"), // Ō
    TranslitEntry::new(0x014D, "o"), // ō
    TranslitEntry::new(0x0150, "O"), // Ő
    TranslitEntry::new(0x0151, "o"), // ő
    TranslitEntry::new(0x0152, "OE"), // Œ
    TranslitEntry::new(0x0153, "oe"), // œ
    TranslitEntry::new(0x0154, "R"), // Ŕ
    TranslitEntry::new(0x0155, "r"), // ŕ
    TranslitEntry::new(0x0158, "R"), // Ř
    TranslitEntry::new(0x0159, "r"), // ř
    TranslitEntry::new(0x015A, "S"), // Ś
    TranslitEntry::new(0x015B, "s"), // ś
    TranslitEntry::new(0x015E, "S"), // Ş
    TranslitEntry::new(0x015F, "s"), // ş
    TranslitEntry::new(0x0160, "S"), // Š
    TranslitEntry::new(0x0161, "s"), // š
    TranslitEntry::new(0x0162, "T"), // Ţ
    TranslitEntry::new(0x0163, "t"), // ţ
    TranslitEntry::new(0x0164, "T"), // Ť
    TranslitEntry::new(0x0165, "t"), // ť
    TranslitEntry::new(0x0168, "U"), // Ũ
    TranslitEntry::new(0x0169, "u"), // ũ
    TranslitEntry::new(0x016A, "u"), // Ū
    TranslitEntry::new(0x016B, "u"), // ū
    TranslitEntry::new(0x016E, "U"), // Ů
    TranslitEntry::new(0x016F, "u"), // ů
    TranslitEntry::new(0x0170, "U"), // Ű
    TranslitEntry::new(0x0171, "u"), // ű
    TranslitEntry::new(0x0172, "U"), // Ų
    TranslitEntry::new(0x0173, "u"), // ų
    TranslitEntry::new(0x0174, "W"), // Ŵ
    TranslitEntry::new(0x0175, "w"), // ŵ
    TranslitEntry::new(0x0176, "Y"), // Ŷ
    TranslitEntry::new(0x0177, "y"), // ŷ
    TranslitEntry::new(0x0178, "Y"), // Ÿ
    TranslitEntry::new(0x0179, "Z"), // Ź
    TranslitEntry::new(0x017A, "z"), // ź
    TranslitEntry::new(0x017B, "Z"), // Ż
    TranslitEntry::new(0x017C, "z"), // ż
    TranslitEntry::new(0x017D, "Z"), // Ž
    TranslitEntry::new(0x017E, "z"), // ž

    // Latin Extended-B
    TranslitEntry::new(0x018F, "E"), // Ə
    TranslitEntry::new(0x0192, "f"), // ƒ
    TranslitEntry::new(0x01A0, "O"), // Ơ
    TranslitEntry::new(0x01A1, "o"), // ơ
    TranslitEntry::new(0x01AF, "U"), // Ư
    TranslitEntry::new(0x01B0, "u"), // ư
    TranslitEntry::new(0x01C8, "LJ"), // ǈ
    TranslitEntry::new(0x01C9, "lj"), // ǉ
    TranslitEntry::new(0x01CB, "NJ"), // ǋ
    TranslitEntry::new(0x01CC, "nj"), // ǌ
    TranslitEntry::new(0x0218, "S"), // Ș
    TranslitEntry::new(0x0219, "s"), // ș
    TranslitEntry::new(0x021A, "T"), // Ț
    TranslitEntry::new(0x021B, "t"), // ț
    TranslitEntry::new(0x0259, "e"), // ə
    TranslitEntry::new(0x02DA, "o"), // ˚

    // Greek
    TranslitEntry::new(0x0386, "A"), // Ά
    TranslitEntry::new(0x0388, "E"), // Έ
    TranslitEntry::new(0x0389, "H"), // Ή
    TranslitEntry::new(0x038A, "I"), // Ί
    TranslitEntry::new(0x038C, "O"), // Ό
    TranslitEntry::new(0x038E, "Y"), // Ύ
    TranslitEntry::new(0x038F, "W"), // Ώ
    TranslitEntry::new(0x0390, "i"), // ΐ
    TranslitEntry::new(0x0391, "A"), // Α
    TranslitEntry::new(0x0392, "B"), // Β
    TranslitEntry::new(0x0393, "G"), // Γ
    TranslitEntry::new(0x0394, "D"), // Δ
    TranslitEntry::new(0x0395, "E"), // Ε
    TranslitEntry::new(0x0396, "Z"), // Ζ
    TranslitEntry::new(0x0397, "H"), // Η
    TranslitEntry::new(0x0398, "8"), // Θ
    TranslitEntry::new(0x0399, "I"), // Ι
    TranslitEntry::new(0x039A, "K"), // Κ
    TranslitEntry::new(0x039B, "L"), // Λ
    TranslitEntry::new(0x039C, "M"), // Μ
    TranslitEntry::new(0x039D, "N"), // Ν
    TranslitEntry::new(0x039E, "3"), // Ξ
    TranslitEntry::new(0x039F, "O"), // Ο
    TranslitEntry::new(0x03A0, "P"), // Π
    TranslitEntry::new(0x03A1, "R"), // Ρ
    TranslitEntry::new(0x03A3, "S"), // Σ
    TranslitEntry::new(0x03A4, "T"), // Τ
    TranslitEntry::new(0x03A5, "Y"), // Υ
    TranslitEntry::new(0x03A6, "F"), // Φ
    TranslitEntry::new(0x03A7, "X"), // Χ
    TranslitEntry::new(0x03A8, "PS"), // Ψ
    TranslitEntry::new(0x03A9, "W"), // Ω
    TranslitEntry::new(0x03AA, "I"), // Ϊ
    TranslitEntry::new(0x03AB, "Y"), // Ϋ
    TranslitEntry::new(0x03AC, "a"), // ά
    TranslitEntry::new(0x03AD, "e"), // έ
    TranslitEntry::new(0x03AE, "h"), // ή
    TranslitEntry::new(0x03AF, "i"), // ί
    TranslitEntry::new(0x03B0, "y"), // ΰ
    TranslitEntry::new(0x03B1, "a"), // α
    TranslitEntry::new(0x03B2, "b"), // β
    TranslitEntry::new(0x03B3, "g"), // γ
    TranslitEntry::new(0x03B4, "d"), // δ
    TranslitEntry::new(0x03B5, "e"), // ε
    TranslitEntry::new(0x03B6, "z"), // ζ
    TranslitEntry::new(0x03B7, "h"), // η
    TranslitEntry::new(0x03B8, "8"), // θ
    TranslitEntry::new(0x03B9, "i"), // ι
    TranslitEntry::new(0x03BA, "k"), // κ
    TranslitEntry::new(0x03BB, "l"), // λ
    TranslitEntry::new(0x03BC, "m"), // μ
    TranslitEntry::new(0x03BD, "n"), // ν
    TranslitEntry::new(0x03BE, "3"), // ξ
    TranslitEntry::new(0x03BF, "o"), // ο
    TranslitEntry::new(0x03C0, "p"), // π
    TranslitEntry::new(0x03C1, "r"), // ρ
    TranslitEntry::new(0x03C2, "s"), // ς
    TranslitEntry::new(0x03C3, "s"), // σ
    TranslitEntry::new(0x03C4, "t"), // τ
    TranslitEntry::new(0x03C5, "y"), // υ
    TranslitEntry::new(0x03C6, "f"), // φ
    TranslitEntry::new(0x03C7, "x"), // χ
    TranslitEntry::new(0x03C8, "ps"), // ψ
    TranslitEntry::new(0x03C9, "w"), // ω
    TranslitEntry::new(0x03CA, "i"), // ϊ
    TranslitEntry::new(0x03CB, "y"), // ϋ
    TranslitEntry::new(0x03CC, "o"), // ό
    TranslitEntry::new(0x03CD, "y"), // ύ
    TranslitEntry::new(0x03CE, "w"), // ώ

    // Cyrillic
    TranslitEntry::new(0x0401, "Yo"), // Ё
    TranslitEntry::new(0x0402, "DJ"), // Ђ
    TranslitEntry::new(0x0404, "Ye"), // Є
    TranslitEntry::new(0x0406, "I"), // І
    TranslitEntry::new(0x0407, "Yi"), // Ї
    TranslitEntry::new(0x0408, "J"), // Ј
    TranslitEntry::new(0x0409, "LJ"), // Љ
    TranslitEntry::new(0x040A, "NJ"), // Њ
    TranslitEntry::new(0x040B, "C"), // Ћ
    TranslitEntry::new(0x040F, "DZ"), // Џ
    TranslitEntry::new(0x0410, "A"), // А
    TranslitEntry::new(0x0411, "B"), // Б
    TranslitEntry::new(0x0412, "V"), // В
    TranslitEntry::new(0x0413, "G"), // Г
    TranslitEntry::new(0x0414, "D"), // Д
    TranslitEntry::new(0x0415, "E"), // Е
    TranslitEntry::new(0x0416, "Zh"), // Ж
    TranslitEntry::new(0x0417, "Z"), // З
    TranslitEntry::new(0x0418, "I"), // И
    TranslitEntry::new(0x0419, "J"), // Й
    TranslitEntry::new(0x041A, "K"), // К
    TranslitEntry::new(0x041B, "L"), // Л
    TranslitEntry::new(0x041C, "M"), // М
    TranslitEntry::new(0x041D, "N"), // Н
    TranslitEntry::new(0x041E, "O"), // О
    TranslitEntry::new(0x041F, "P"), // П
    TranslitEntry::new(0x0420, "R"), // Р
    TranslitEntry::new(0x0421, "S"), // С
    TranslitEntry::new(0x0422, "T"), // Т
    TranslitEntry::new(0x0423, "U"), // У
    TranslitEntry::new(0x0424, "F"), // Ф
    TranslitEntry::new(0x0425, "H"), // Х
    TranslitEntry::new(0x0426, "C"), // Ц
    TranslitEntry::new(0x0427, "Ch"), // Ч
    TranslitEntry::new(0x0428, "Sh"), // Ш
    TranslitEntry::new(0x0429, "Sh"), // Щ
    TranslitEntry::new(0x042A, "U"), // Ъ
    TranslitEntry::new(0x042B, "Y"), // Ы
    TranslitEntry::new(0x042C, ""), // Ь
    TranslitEntry::new(0x042D, "E"), // Э
    TranslitEntry::new(0x042E, "Yu"), // Ю
    TranslitEntry::new(0x042F, "Ya"), // Я
    TranslitEntry::new(0x0430, "a"), // а
    TranslitEntry::new(0x0431, "b"), // б
    TranslitEntry::new(0x0432, "v"), // в
    TranslitEntry::new(0x0433, "g"), // г
    TranslitEntry::new(0x0434, "d"), // д
    TranslitEntry::new(0x0435, "e"), // е
    TranslitEntry::new(0x0436, "zh"), // ж
    TranslitEntry::new(0x0437, "z"), // з
    TranslitEntry::new(0x0438, "i"), // и
    TranslitEntry::new(0x0439, "j"), // й
    TranslitEntry::new(0x043A, "k"), // к
    TranslitEntry::new(0x043B, "l"), // л
    TranslitEntry::new(0x043C, "m"), // м
    TranslitEntry::new(0x043D, "n"), // н
    TranslitEntry::new(0x043E, "o"), // о
    TranslitEntry::new(0x043F, "p"), // п
    TranslitEntry::new(0x0440, "r"), // р
    TranslitEntry::new(0x0441, "s"), // с
    TranslitEntry::new(0x0442, "t"), // т
    TranslitEntry::new(0x0443, "u"), // у
    TranslitEntry::new(0x0444, "f"), // ф
    TranslitEntry::new(0x0445, "h"), // х
    TranslitEntry::new(0x0446, "c"), // ц
    TranslitEntry::new(0x0447, "ch"), // ч
    TranslitEntry::new(0x0448, "sh"), // ш
    TranslitEntry::new(0x0449, "sh"), // щ
    TranslitEntry::new(0x044A, "u"), // ъ
    TranslitEntry::new(0x044B, "y"), // ы
    TranslitEntry::new(0x044C, ""), // ь
    TranslitEntry::new(0x044D, "e"), // э
    TranslitEntry::new(0x044E, "yu"), // ю
    TranslitEntry::new(0x044F, "ya"), // я
    TranslitEntry::new(0x0451, "yo"), // ё
    TranslitEntry::new(0x0452, "dj"), // ђ
    TranslitEntry::new(0x0454, "ye"), // є
    TranslitEntry::new(0x0456, "i"), // і
    TranslitEntry::new(0x0457, "yi"), // ї
    TranslitEntry::new(0x0458, "j"), // ј
    TranslitEntry::new(0x0459, "lj"), // љ
    TranslitEntry::new(0x045A, "nj"), // њ
    TranslitEntry::new(0x045B, "c"), // ћ
    TranslitEntry::new(0x045D, "u"), // ѝ
    TranslitEntry::new(0x045F, "dz"), // џ
    TranslitEntry::new(0x0490, "G"), // Ґ
    TranslitEntry::new(0x0491, "g"), // ґ
    TranslitEntry::new(0x0492, "GH"), // Ғ
    TranslitEntry::new(0x0493, "gh"), // ғ
    TranslitEntry::new(0x049A, "KH"), // Қ
    TranslitEntry::new(0x049B, "kh"), // қ
    TranslitEntry::new(0x04A2, "NG"), // Ң
    TranslitEntry::new(0x04A3, "ng"), // ң
    TranslitEntry::new(0x04AE, "UE"), // Ү
    TranslitEntry::new(0x04AF, "ue"), // ү
    TranslitEntry::new(0x04B0, "U"), // Ұ
    TranslitEntry::new(0x04B1, "u"), // ұ
    TranslitEntry::new(0x04BA, "H"), // Һ
    TranslitEntry::new(0x04BB, "h"), // һ
    TranslitEntry::new(0x04D8, "AE"), // Ә
    TranslitEntry::new(0x04D9, "ae"), // ә
    TranslitEntry::new(0x04E8, "OE"), // Ө
    TranslitEntry::new(0x04E9, "oe"), // ө

    // Arabic
    TranslitEntry::new(0x0621, "a"), // ء
    TranslitEntry::new(0x0622, "aa"), // آ
    TranslitEntry::new(0x0623, "a"), // أ
    TranslitEntry::new(0x0624, "u"), // ؤ
    TranslitEntry::new(0x0625, "i"), // إ
    TranslitEntry::new(0x0626, "e"), // ئ
    TranslitEntry::new(0x0627, "a"), // ا
    TranslitEntry::new(0x0628, "b"), // ب
    TranslitEntry::new(0x0629, "h"), // ة
    TranslitEntry::new(0x062A, "t"), // ت
    TranslitEntry::new(0x062B, "th"), // ث
    TranslitEntry::new(0x062C, "j"), // ج
    TranslitEntry::new(0x062D, "h"), // ح
    TranslitEntry::new(0x062E, "kh"), // خ
    TranslitEntry::new(0x062F, "d"), // د
    TranslitEntry::new(0x0630, "th"), // ذ
    TranslitEntry::new(0x0631, "r"), // ر
    TranslitEntry::new(0x0632, "z"), // ز
    TranslitEntry::new(0x0633, "s"), // س
    TranslitEntry::new(0x0634, "sh"), // ش
    TranslitEntry::new(0x0635, "s"), // ص
    TranslitEntry::new(0x0636, "dh"), // ض
    TranslitEntry::new(0x0637, "t"), // ط
    TranslitEntry::new(0x0638, "z"), // ظ
    TranslitEntry::new(0x0639, "a"), // ع
    TranslitEntry::new(0x063A, "gh"), // غ
    TranslitEntry::new(0x0641, "f"), // ف
    TranslitEntry::new(0x0642, "q"), // ق
    TranslitEntry::new(0x0643, "k"), // ك
    TranslitEntry::new(0x0644, "l"), // ل
    TranslitEntry::new(0x0645, "m"), // م
    TranslitEntry::new(0x0646, "n"), // ن
    TranslitEntry::new(0x0647, "h"), // ه
    TranslitEntry::new(0x0648, "w"), // و
    TranslitEntry::new(0x0649, "a"), // ى
    TranslitEntry::new(0x064A, "y"), // ي
    TranslitEntry::new(0x064B, "an"), // ً
    TranslitEntry::new(0x064C, "on"), // ٌ
    TranslitEntry::new(0x064D, "en"), // ٍ
    TranslitEntry::new(0x064E, "a"), // َ
    TranslitEntry::new(0x064F, "u"), // ُ
    TranslitEntry::new(0x0650, "e"), // ِ
    TranslitEntry::new(0x0651, ""),
    TranslitEntry::new(0x0660, "0"), // ٠
    TranslitEntry::new(0x0661, "1"), // ١
    TranslitEntry::new(0x0662, "2"), // ٢
    TranslitEntry::new(0x0663, "3"), // ٣
    TranslitEntry::new(0x0664, "4"), // ٤
    TranslitEntry::new(0x0665, "5"), // ٥
    TranslitEntry::new(0x0666, "6"), // ٦
    TranslitEntry::new(0x0667, "7"), // ٧
    TranslitEntry::new(0x0668, "8"), // ٨
    TranslitEntry::new(0x0669, "9"), // ٩
    TranslitEntry::new(0x067E, "p"), // پ
    TranslitEntry::new(0x0686, "ch"), // چ
    TranslitEntry::new(0x0698, "zh"), // ژ
    TranslitEntry::new(0x06A9, "k"), // ک
    TranslitEntry::new(0x06AF, "g"), // گ
    TranslitEntry::new(0x06CC, "y"), // ی
    TranslitEntry::new(0x06F0, "0"), // ۰
    TranslitEntry::new(0x06F1, "1"), // ۱
    TranslitEntry::new(0x06F2, "2"), // ۲
    TranslitEntry::new(0x06F3, "3"), // ۳
    TranslitEntry::new(0x06F4, "4"), // ۴
    TranslitEntry::new(0x06F5, "5"), // ۵
    TranslitEntry::new(0x06F6, "6"), // ۶
    TranslitEntry::new(0x06F7, "7"), // ۷
    TranslitEntry::new(0x06F8, "8"), // ۸
    TranslitEntry::new(0x06F9, "9"), // ۹

    // Georgian
    TranslitEntry::new(0x10D0, "a"), // ა
    TranslitEntry::new(0x10D1, "b"), // ბ
    TranslitEntry::new(0x10D2, "g"), // გ
    TranslitEntry::new(0x10D3, "d"), // დ
    TranslitEntry::new(0x10D4, "e"), // ე
    TranslitEntry::new(0x10D5, "v"), // ვ
    TranslitEntry::new(0x10D6, "z"), // ზ
    TranslitEntry::new(0x10D7, "t"), // თ
    TranslitEntry::new(0x10D8, "i"), // ი
    TranslitEntry::new(0x10D9, "k"), // კ
    TranslitEntry::new(0x10DA, "l"), // ლ
    TranslitEntry::new(0x10DB, "m"), // მ
    TranslitEntry::new(0x10DC, "n"), // ნ
    TranslitEntry::new(0x10DD, "o"), // ო
    TranslitEntry::new(0x10DE, "p"), // პ
    TranslitEntry::new(0x10DF, "zh"), // ჟ
    TranslitEntry::new(0x10E0, "r"), // რ
    TranslitEntry::new(0x10E1, "s"), // ს
    TranslitEntry::new(0x10E2, "t"), // ტ
    TranslitEntry::new(0x10E3, "u"), // უ
    TranslitEntry::new(0x10E4, "f"), // ფ
    TranslitEntry::new(0x10E5, "k"), // ქ
    TranslitEntry::new(0x10E6, "gh"), // ღ
    TranslitEntry::new(0x10E7, "q"), // ყ
    TranslitEntry::new(0x10E8, "sh"), // შ
    TranslitEntry::new(0x10E9, "ch"), // ჩ
    TranslitEntry::new(0x10EA, "ts"), // ც
    TranslitEntry::new(0x10EB, "dz"), // ძ
    TranslitEntry::new(0x10EC, "ts"), // წ
    TranslitEntry::new(0x10ED, "ch"), // ჭ
    TranslitEntry::new(0x10EE, "kh"), // ხ
    TranslitEntry::new(0x10EF, "j"), // ჯ
    TranslitEntry::new(0x10F0, "h"), // ჰ

    // Latin Extended Additional (Vietnamese)
    TranslitEntry::new(0x1EA0, "A"), // Ạ
    TranslitEntry::new(0x1EA1, "a"), // ạ
    TranslitEntry::new(0x1EA2, "A"), // Ả
    TranslitEntry::new(0x1EA3, "a"), // ả
    TranslitEntry::new(0x1EA4, "A"), // Ấ
    TranslitEntry::new(0x1EA5, "a"), // ấ
    TranslitEntry::new(0x1EA6, "A"), // Ầ
    TranslitEntry::new(0x1EA7, "a"), // ầ
    TranslitEntry::new(0x1EA8, "A"), // Ẩ
    TranslitEntry::new(0x1EA9, "a"), // ẩ
    TranslitEntry::new(0x1EAA, "A"), // Ẫ
    TranslitEntry::new(0x1EAB, "a"), // ẫ
    TranslitEntry::new(0x1EAC, "A"), // Ậ
    TranslitEntry::new(0x1EAD, "a"), // ậ
    TranslitEntry::new(0x1EAE, "A"), // Ắ
    TranslitEntry::new(0x1EAF, "a"), // ắ
    TranslitEntry::new(0x1EB0, "A"), // Ằ
    TranslitEntry::new(0x1EB1, "a"), // ằ
    TranslitEntry::new(0x1EB2, "A"), // Ẳ
    TranslitEntry::new(0x1EB3, "a"), // ẳ
    TranslitEntry::new(0x1EB4, "A"), // Ẵ
    TranslitEntry::new(0x1EB5, "a"), // ẵ
    TranslitEntry::new(0x1EB6, "A"), // Ặ
    TranslitEntry::new(0x1EB7, "a"), // ặ
    TranslitEntry::new(0x1EB8, "E"), // Ẹ
    TranslitEntry::new(0x1EB9, "e"), // ẹ
    TranslitEntry::new(0x1EBA, "E"), // Ẻ
    TranslitEntry::new(0x1EBB, "e"), // ẻ
    TranslitEntry::new(0x1EBC, "E"), // Ẽ
    TranslitEntry::new(0x1EBD, "e"), // ẽ
    TranslitEntry::new(0x1EBE, "E"), // Ế
    TranslitEntry::new(0x1EBF, "e"), // ế
    TranslitEntry::new(0x1EC0, "E"), // Ề
    TranslitEntry::new(0x1EC1, "e"), // ề
    TranslitEntry::new(0x1EC2, "E"), // Ể
    TranslitEntry::new(0x1EC3, "e"), // ể
    TranslitEntry::new(0x1EC4, "E"), // Ễ
    TranslitEntry::new(0x1EC5, "e"), // ễ
    TranslitEntry::new(0x1EC6, "E"), // Ệ
    TranslitEntry::new(0x1EC7, "e"), // ệ
    TranslitEntry::new(0x1EC8, "I"), // Ỉ
    TranslitEntry::new(0x1EC9, "i"), // ỉ
    TranslitEntry::new(0x1ECA, "I"), // Ị
    TranslitEntry::new(0x1ECB, "i"), // ị
    TranslitEntry::new(0x1ECC, "O"), // Ọ
    TranslitEntry::new(0x1ECD, "o"), // ọ
    TranslitEntry::new(0x1ECE, "O"), // Ỏ
    TranslitEntry::new(0x1ECF, "o"), // ỏ
    TranslitEntry::new(0x1ED0, "O"), // Ố
    TranslitEntry::new(0x1ED1, "o"), // ố
    TranslitEntry::new(0x1ED2, "O"), // Ồ
    TranslitEntry::new(0x1ED3, "o"), // ồ
    TranslitEntry::new(0x1ED4, "O"), // Ổ
    TranslitEntry::new(0x1ED5, "o"), // ổ
    TranslitEntry::new(0x1ED6, "O"), // Ỗ
    TranslitEntry::new(0x1ED7, "o"), // ỗ
    TranslitEntry::new(0x1ED8, "O"), // Ộ
    TranslitEntry::new(0x1ED9, "o"), // ộ
    TranslitEntry::new(0x1EDA, "O"), // Ớ
    TranslitEntry::new(0x1EDB, "o"), // ớ
    TranslitEntry::new(0x1EDC, "O"), // Ờ
    TranslitEntry::new(0x1EDD, "o"), // ờ
    TranslitEntry::new(0x1EDE, "O"), // Ở
    TranslitEntry::new(0x1EDF, "o"), // ở
    TranslitEntry::new(0x1EE0, "O"), // Ỡ
    TranslitEntry::new(0x1EE1, "o"), // ỡ
    TranslitEntry::new(0x1EE2, "O"), // Ợ
    TranslitEntry::new(0x1EE3, "o"), // ợ
    TranslitEntry::new(0x1EE4, "U"), // Ụ
    TranslitEntry::new(0x1EE5, "u"), // ụ
    TranslitEntry::new(0x1EE6, "U"), // Ủ
    TranslitEntry::new(0x1EE7, "u"), // ủ
    TranslitEntry::new(0x1EE8, "U"), // Ứ
    TranslitEntry::new(0x1EE9, "u"), // ứ
    TranslitEntry::new(0x1EEA, "U"), // Ừ
    TranslitEntry::new(0x1EEB, "u"), // ừ
    TranslitEntry::new(0x1EEC, "U"), // Ử
    TranslitEntry::new(0x1EED, "u"), // ử
    TranslitEntry::new(0x1EEE, "U"), // Ữ
    TranslitEntry::new(0x1EEF, "u"), // ữ
    TranslitEntry::new(0x1EF0, "U"), // Ự
    TranslitEntry::new(0x1EF1, "u"), // ự
    TranslitEntry::new(0x1EF2, "Y"), // Ỳ
    TranslitEntry::new(0x1EF3, "y"), // ỳ
    TranslitEntry::new(0x1EF4, "Y"), // Ỵ
    TranslitEntry::new(0x1EF5, "y"), // ỵ
    TranslitEntry::new(0x1EF6, "Y"), // Ỷ
    TranslitEntry::new(0x1EF7, "y"), // ỷ
    TranslitEntry::new(0x1EF8, "Y"), // Ỹ
    TranslitEntry::new(0x1EF9, "y"), // ỹ

    // Punctuation, currency and other symbols
    TranslitEntry::new(0x2013, "-"), // –
    TranslitEntry::new(0x2018, "'"), // ‘
    TranslitEntry::new(0x2019, "'"), // ’
    TranslitEntry::new(0x201C, "\""), // “
    TranslitEntry::new(0x201D, "\""), // ”
    TranslitEntry::new(0x201E, "\""), // „
    TranslitEntry::new(0x2020, "+"), // †
    TranslitEntry::new(0x2022, "*"), // •
    TranslitEntry::new(0x2026, "..."), // …
    TranslitEntry::new(0x20A0, "ecu"), // ₠
    TranslitEntry::new(0x20A2, "cruzeiro"), // ₢
    TranslitEntry::new(0x20A3, "french franc"), // ₣
    TranslitEntry::new(0x20A4, "lira"), // ₤
    TranslitEntry::new(0x20A5, "mill"), // ₥
    TranslitEntry::new(0x20A6, "naira"), // ₦
    TranslitEntry::new(0x20A7, "peseta"), // ₧
    TranslitEntry::new(0x20A8, "rupee"), // ₨
    TranslitEntry::new(0x20A9, "won"), // ₩
    TranslitEntry::new(0x20AA, "new shequel"), // ₪
    TranslitEntry::new(0x20AB, "dong"), // ₫
    TranslitEntry::new(0x20AC, "euro"), // €
    TranslitEntry::new(0x20AD, "kip"), // ₭
    TranslitEntry::new(0x20AE, "tugrik"), // ₮
    TranslitEntry::new(0x20AF, "drachma"), // ₯
    TranslitEntry::new(0x20B0, "penny"), // ₰
    TranslitEntry::new(0x20B1, "peso"), // ₱
    TranslitEntry::new(0x20B2, "guarani"), // ₲
    TranslitEntry::new(0x20B3, "austral"), // ₳
    TranslitEntry::new(0x20B4, "hryvnia"), // ₴
    TranslitEntry::new(0x20B5, "cedi"), // ₵
    TranslitEntry::new(0x20B8, "kazakhstani tenge"), // ₸
    TranslitEntry::new(0x20B9, "indian rupee"), // ₹
    TranslitEntry::new(0x20BA, "turkish lira"), // ₺
    TranslitEntry::new(0x20BD, "russian ruble"), // ₽
    TranslitEntry::new(0x20BF, "bitcoin"), // ₿
    TranslitEntry::new(0x2120, "sm"), // ℠
    TranslitEntry::new(0x2122, "tm"), // ™
    TranslitEntry::new(0x2202, "d"), // ∂
    TranslitEntry::new(0x2206, "delta"), // ∆
    TranslitEntry::new(0x2211, "sum"), // ∑
    TranslitEntry::new(0x221E, "infinity"), // ∞
    TranslitEntry::new(0x2665, "love"), // ♥
    TranslitEntry::new(0x5143, "yuan"), // 元
    TranslitEntry::new(0x5186, "yen"), // 円
    TranslitEntry::new(0xFDF5, "laa"), // ﷵ
    TranslitEntry::new(0xFDF7, "laa"), // ﷷ
    TranslitEntry::new(0xFDF9, "lai"), // ﷹ
    TranslitEntry::new(0xFDFB, "la"), // ﷻ
    TranslitEntry::new(0xFDFC, "rial"), // ﷼
];
