// src/data/catalog.rs

//! The byte layout of every supported record type.
//!
//! Offsets follow the vendor's published record specifications. Offsets
//! are 0-based here (the vendor documents are 1-based), spans are
//! half-open `[start, end)`, and the line terminator is not part of any
//! layout.
//!
//! Most layouts open with the 8-byte race key:
//!
//! | bytes   | field    |
//! |---------|----------|
//! | `[0,2)` | 場コード |
//! | `[2,4)` | 年       |
//! | `[4,5)` | 回       |
//! | `[5,6)` | 日 (hex) |
//! | `[6,8)` | Ｒ       |
//!
//! The 日 byte counts a meeting's days as `1`..`9` then `a`..`f`.

use crate::data::layout::{
    ByteSpan,
    Charset,
    FieldLayout,
    FieldTransform,
    RecordTypeTag,
    TextEncoding,
};

use ::const_format::{assertcp, assertcp_eq};

/// `true` if every repeated group of `spans` is a whole number of
/// `count` entries of `width` bytes.
pub const fn repeated_groups_divide(spans: &[ByteSpan]) -> bool {
    let mut at: usize = 0;
    while at < spans.len() {
        let span: &ByteSpan = &spans[at];
        if let FieldTransform::RepeatedGroup { width, count } = span.transform {
            if width == 0 || span.end < span.start {
                return false;
            }
            let len: usize = span.end - span.start;
            if len % width != 0 || len / width != count {
                return false;
            }
        }
        at += 1;
    }

    true
}

/// End offset of the last span.
const fn spans_end(spans: &[ByteSpan]) -> usize {
    if spans.is_empty() {
        return 0;
    }
    spans[spans.len() - 1].end
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BAC 番組データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const BAC_LINE_LENGTH: usize = 182;

pub const BAC_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("年月日", 8, 16),
    ByteSpan::text("発走時間", 16, 20),
    ByteSpan::text("距離", 20, 24),
    ByteSpan::text("芝ダ障害コード", 24, 25),
    ByteSpan::text("右左", 25, 26),
    ByteSpan::text("内外", 26, 27),
    ByteSpan::text("種別", 27, 29),
    ByteSpan::text("条件", 29, 31),
    ByteSpan::text("記号", 31, 34),
    ByteSpan::text("重量", 34, 35),
    ByteSpan::text("グレード", 35, 36),
    ByteSpan::text("レース名", 36, 86),
    ByteSpan::text("回数", 86, 94),
    ByteSpan::text("頭数", 94, 96),
    ByteSpan::text("コース", 96, 97),
    ByteSpan::text("開催区分", 97, 98),
    ByteSpan::text("レース名短縮", 98, 106),
    ByteSpan::text("レース名９文字", 106, 124),
    ByteSpan::text("データ区分", 124, 125),
    ByteSpan::text("１着賞金", 125, 130),
    ByteSpan::text("２着賞金", 130, 135),
    ByteSpan::text("３着賞金", 135, 140),
    ByteSpan::text("４着賞金", 140, 145),
    ByteSpan::text("５着賞金", 145, 150),
    ByteSpan::text("１着算入賞金", 150, 155),
    ByteSpan::text("２着算入賞金", 155, 160),
    ByteSpan::text("馬券発売フラグ", 160, 176),
    ByteSpan::text("WIN5フラグ", 176, 177),
    ByteSpan::text("予備", 177, 182),
];
assertcp_eq!(spans_end(BAC_SPANS), BAC_LINE_LENGTH);

pub const BAC_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::BAC,
    line_length: BAC_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: BAC_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CHA 調教本追切データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const CHA_LINE_LENGTH: usize = 62;

pub const CHA_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("馬番", 8, 10),
    ByteSpan::text("曜日", 10, 12),
    ByteSpan::text("調教年月日", 12, 20),
    ByteSpan::text("回数", 20, 21),
    ByteSpan::text("調教コースコード", 21, 23),
    ByteSpan::text("追切種類", 23, 24),
    ByteSpan::text("追い状態", 24, 26),
    ByteSpan::text("乗り役", 26, 27),
    ByteSpan::text("調教Ｆ", 27, 28),
    ByteSpan::text("テンＦ", 28, 31),
    ByteSpan::text("中間Ｆ", 31, 34),
    ByteSpan::text("終いＦ", 34, 37),
    ByteSpan::text("テンＦ指数", 37, 40),
    ByteSpan::text("中間Ｆ指数", 40, 43),
    ByteSpan::text("終いＦ指数", 43, 46),
    ByteSpan::text("追切指数", 46, 49),
    ByteSpan::text("併せ結果", 49, 50),
    ByteSpan::text("追切種類（併せ馬）", 50, 51),
    ByteSpan::text("年齢", 51, 53),
    ByteSpan::text("クラス", 53, 55),
    ByteSpan::text("予備", 55, 62),
];
assertcp_eq!(spans_end(CHA_SPANS), CHA_LINE_LENGTH);

/// The only layout with a fixed encoding.
pub const CHA_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::CHA,
    line_length: CHA_LINE_LENGTH,
    encoding: TextEncoding::Fixed(Charset::ShiftJis),
    spans: CHA_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CYB 調教分析データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const CYB_LINE_LENGTH: usize = 94;

pub const CYB_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("馬番", 8, 10),
    ByteSpan::text("調教タイプ", 10, 12),
    ByteSpan::text("調教コース種別", 12, 13),
    ByteSpan::text("坂", 13, 15),
    ByteSpan::text("Ｗ", 15, 17),
    ByteSpan::text("ダ", 17, 19),
    ByteSpan::text("芝", 19, 21),
    ByteSpan::text("プ", 21, 23),
    ByteSpan::text("障", 23, 25),
    ByteSpan::text("ポ", 25, 27),
    ByteSpan::text("調教距離", 27, 28),
    ByteSpan::text("調教重点", 28, 29),
    ByteSpan::text("追切指数", 29, 32),
    ByteSpan::text("仕上指数", 32, 35),
    ByteSpan::text("調教量評価", 35, 36),
    ByteSpan::text("仕上指数変化", 36, 37),
    ByteSpan::text("調教コメント", 37, 77),
    ByteSpan::text("コメント年月日", 77, 85),
    ByteSpan::text("調教評価", 85, 86),
    ByteSpan::text("一週前追切指数", 86, 89),
    ByteSpan::text("一週前追切コース", 89, 91),
    ByteSpan::text("予備", 91, 94),
];
assertcp_eq!(spans_end(CYB_SPANS), CYB_LINE_LENGTH);

pub const CYB_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::CYB,
    line_length: CYB_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: CYB_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CZA 調教師データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const CZA_LINE_LENGTH: usize = 270;

pub const CZA_SPANS: &[ByteSpan] = &[
    ByteSpan::text("調教師コード", 0, 5),
    ByteSpan::text("登録抹消フラグ", 5, 6),
    ByteSpan::text("登録抹消年月日", 6, 14),
    ByteSpan::text("調教師名", 14, 26),
    ByteSpan::text("調教師カナ", 26, 56),
    ByteSpan::text("調教師名略称", 56, 62),
    ByteSpan::text("所属コード", 62, 63),
    ByteSpan::text("所属地域名", 63, 67),
    ByteSpan::text("生年月日", 67, 75),
    ByteSpan::text("初免許年", 75, 79),
    ByteSpan::text("調教師コメント", 79, 119),
    ByteSpan::text("コメント入力年月日", 119, 127),
    ByteSpan::text("本年リーディング", 127, 130),
    ByteSpan::text("本年平地成績", 130, 142),
    ByteSpan::text("本年障害成績", 142, 154),
    ByteSpan::text("本年特別勝数", 154, 157),
    ByteSpan::text("本年重賞勝数", 157, 160),
    ByteSpan::text("昨年リーディング", 160, 163),
    ByteSpan::text("昨年平地成績", 163, 175),
    ByteSpan::text("昨年障害成績", 175, 187),
    ByteSpan::text("昨年特別勝数", 187, 190),
    ByteSpan::text("昨年重賞勝数", 190, 193),
    ByteSpan::text("通算平地成績", 193, 213),
    ByteSpan::text("通算障害成績", 213, 233),
    ByteSpan::text("データ年月日", 233, 241),
    ByteSpan::text("予備", 241, 270),
];
assertcp_eq!(spans_end(CZA_SPANS), CZA_LINE_LENGTH);

pub const CZA_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::CZA,
    line_length: CZA_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: CZA_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// JOA 情報データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const JOA_LINE_LENGTH: usize = 114;

pub const JOA_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("馬番", 8, 10),
    ByteSpan::text("血統登録番号", 10, 18),
    ByteSpan::text("馬名", 18, 54),
    ByteSpan::text("基準オッズ", 54, 59),
    ByteSpan::text("基準複勝オッズ", 59, 64),
    ByteSpan::text("CID調教素点", 64, 69),
    ByteSpan::text("CID厩舎素点", 69, 74),
    ByteSpan::text("CID素点", 74, 79),
    ByteSpan::text("CID", 79, 82),
    ByteSpan::text("LS指数", 82, 87),
    ByteSpan::text("LS評価", 87, 88),
    ByteSpan::text("EM", 88, 89),
    ByteSpan::text("厩舎ＢＢ印", 89, 90),
    ByteSpan::text("厩舎ＢＢ◎単勝回収率", 90, 95),
    ByteSpan::text("厩舎ＢＢ◎連対率", 95, 100),
    ByteSpan::text("騎手ＢＢ印", 100, 101),
    ByteSpan::text("騎手ＢＢ◎単勝回収率", 101, 106),
    ByteSpan::text("騎手ＢＢ◎連対率", 106, 111),
    ByteSpan::text("予備", 111, 114),
];
assertcp_eq!(spans_end(JOA_SPANS), JOA_LINE_LENGTH);

pub const JOA_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::JOA,
    line_length: JOA_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: JOA_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// KAB 開催データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const KAB_LINE_LENGTH: usize = 70;

/// A meeting-day record; the key has no Ｒ.
pub const KAB_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("年月日", 6, 14),
    ByteSpan::text("開催区分", 14, 15),
    ByteSpan::text("曜日", 15, 17),
    ByteSpan::text("場名", 17, 21),
    ByteSpan::text("天候コード", 21, 22),
    ByteSpan::text("芝馬場状態コード", 22, 24),
    ByteSpan::text("芝馬場状態内", 24, 25),
    ByteSpan::text("芝馬場状態中", 25, 26),
    ByteSpan::text("芝馬場状態外", 26, 27),
    ByteSpan::text("芝馬場差", 27, 30),
    ByteSpan::text("直線馬場差最内", 30, 32),
    ByteSpan::text("直線馬場差内", 32, 34),
    ByteSpan::text("直線馬場差中", 34, 36),
    ByteSpan::text("直線馬場差外", 36, 38),
    ByteSpan::text("直線馬場差大外", 38, 40),
    ByteSpan::text("ダ馬場状態コード", 40, 42),
    ByteSpan::text("ダ馬場状態内", 42, 43),
    ByteSpan::text("ダ馬場状態中", 43, 44),
    ByteSpan::text("ダ馬場状態外", 44, 45),
    ByteSpan::text("ダ馬場差", 45, 48),
    ByteSpan::text("データ区分", 48, 49),
    ByteSpan::text("連続何日目", 49, 51),
    ByteSpan::text("芝種類", 51, 52),
    ByteSpan::text("草丈", 52, 56),
    ByteSpan::text("転圧", 56, 57),
    ByteSpan::text("凍結防止剤", 57, 58),
    ByteSpan::text("中間降水量", 58, 63),
    ByteSpan::text("予備", 63, 70),
];
assertcp_eq!(spans_end(KAB_SPANS), KAB_LINE_LENGTH);

pub const KAB_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::KAB,
    line_length: KAB_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: KAB_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// KKA 競走馬拡張データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const KKA_LINE_LENGTH: usize = 322;

/// Each 成績 field is four 3-byte counts (1着, 2着, 3着, 着外).
pub const KKA_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("馬番", 8, 10),
    ByteSpan::text("ＪＲＡ成績", 10, 22),
    ByteSpan::text("交流成績", 22, 34),
    ByteSpan::text("他成績", 34, 46),
    ByteSpan::text("芝ダ障害別成績", 46, 58),
    ByteSpan::text("芝ダ障害別距離成績", 58, 70),
    ByteSpan::text("トラック距離成績", 70, 82),
    ByteSpan::text("ローテ成績", 82, 94),
    ByteSpan::text("回り成績", 94, 106),
    ByteSpan::text("騎手成績", 106, 118),
    ByteSpan::text("良成績", 118, 130),
    ByteSpan::text("稍成績", 130, 142),
    ByteSpan::text("重成績", 142, 154),
    ByteSpan::text("Ｓペース成績", 154, 166),
    ByteSpan::text("Ｍペース成績", 166, 178),
    ByteSpan::text("Ｈペース成績", 178, 190),
    ByteSpan::text("季節成績", 190, 202),
    ByteSpan::text("枠成績", 202, 214),
    ByteSpan::text("騎手距離成績", 214, 226),
    ByteSpan::text("騎手トラック距離成績", 226, 238),
    ByteSpan::text("騎手調教師別成績", 238, 250),
    ByteSpan::text("騎手馬主別成績", 250, 262),
    ByteSpan::text("騎手ブリンカ成績", 262, 274),
    ByteSpan::text("調教師馬主別成績", 274, 286),
    ByteSpan::text("父馬産駒芝連対率", 286, 289),
    ByteSpan::text("父馬産駒ダ連対率", 289, 292),
    ByteSpan::text("父馬産駒連対平均距離", 292, 296),
    ByteSpan::text("母父馬産駒芝連対率", 296, 299),
    ByteSpan::text("母父馬産駒ダ連対率", 299, 302),
    ByteSpan::text("母父馬産駒連対平均距離", 302, 306),
    ByteSpan::text("予備", 306, 322),
];
assertcp_eq!(spans_end(KKA_SPANS), KKA_LINE_LENGTH);

pub const KKA_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::KKA,
    line_length: KKA_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: KKA_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// KYI 競走馬データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const KYI_LINE_LENGTH: usize = 1022;

pub const KYI_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("馬番", 8, 10),
    ByteSpan::text("血統登録番号", 10, 18),
    ByteSpan::text("馬名", 18, 54),
    ByteSpan::text("IDM", 54, 59),
    ByteSpan::text("騎手指数", 59, 64),
    ByteSpan::text("情報指数", 64, 69),
    ByteSpan::text("予備1", 69, 74),
    ByteSpan::text("予備2", 74, 79),
    ByteSpan::text("予備3", 79, 84),
    ByteSpan::text("総合指数", 84, 89),
    ByteSpan::text("脚質", 89, 90),
    ByteSpan::text("距離適性", 90, 91),
    ByteSpan::text("上昇度", 91, 92),
    ByteSpan::text("ローテーション", 92, 95),
    ByteSpan::text("基準オッズ", 95, 100),
    ByteSpan::text("基準人気順位", 100, 102),
    ByteSpan::text("基準複勝オッズ", 102, 107),
    ByteSpan::text("基準複勝人気順位", 107, 109),
    ByteSpan::text("特定情報◎", 109, 112),
    ByteSpan::text("特定情報○", 112, 115),
    ByteSpan::text("特定情報▲", 115, 118),
    ByteSpan::text("特定情報△", 118, 121),
    ByteSpan::text("特定情報×", 121, 124),
    ByteSpan::text("総合情報◎", 124, 127),
    ByteSpan::text("総合情報○", 127, 130),
    ByteSpan::text("総合情報▲", 130, 133),
    ByteSpan::text("総合情報△", 133, 136),
    ByteSpan::text("総合情報×", 136, 139),
    ByteSpan::text("人気指数", 139, 144),
    ByteSpan::text("調教指数", 144, 149),
    ByteSpan::text("厩舎指数", 149, 154),
    ByteSpan::text("調教矢印コード", 154, 155),
    ByteSpan::text("厩舎評価コード", 155, 156),
    ByteSpan::text("騎手期待連対率", 156, 160),
    ByteSpan::text("激走指数", 160, 163),
    ByteSpan::text("蹄コード", 163, 165),
    ByteSpan::text("重適正コード", 165, 166),
    ByteSpan::text("クラスコード", 166, 168),
    ByteSpan::text("予備4", 168, 170),
    ByteSpan::text("ブリンカー", 170, 171),
    ByteSpan::text("騎手名", 171, 183),
    ByteSpan::text("負担重量", 183, 186),
    ByteSpan::text("見習い区分", 186, 187),
    ByteSpan::text("調教師名", 187, 199),
    ByteSpan::text("調教師所属", 199, 203),
    ByteSpan::text("前走1競走成績キー", 203, 219),
    ByteSpan::text("前走2競走成績キー", 219, 235),
    ByteSpan::text("前走3競走成績キー", 235, 251),
    ByteSpan::text("前走4競走成績キー", 251, 267),
    ByteSpan::text("前走5競走成績キー", 267, 283),
    ByteSpan::text("前走1レースキー", 283, 291),
    ByteSpan::text("前走2レースキー", 291, 299),
    ByteSpan::text("前走3レースキー", 299, 307),
    ByteSpan::text("前走4レースキー", 307, 315),
    ByteSpan::text("前走5レースキー", 315, 323),
    ByteSpan::text("枠番", 323, 324),
    ByteSpan::text("予備5", 324, 326),
    ByteSpan::text("総合印", 326, 327),
    ByteSpan::text("IDM印", 327, 328),
    ByteSpan::text("情報印", 328, 329),
    ByteSpan::text("騎手印", 329, 330),
    ByteSpan::text("厩舎印", 330, 331),
    ByteSpan::text("調教印", 331, 332),
    ByteSpan::text("激走印", 332, 333),
    ByteSpan::text("芝適性コード", 333, 334),
    ByteSpan::text("ダ適性コード", 334, 335),
    ByteSpan::text("騎手コード", 335, 340),
    ByteSpan::text("調教師コード", 340, 345),
    ByteSpan::text("予備6", 345, 346),
    ByteSpan::text("賞金情報_獲得賞金", 346, 352),
    ByteSpan::text("賞金情報_収得賞金", 352, 357),
    ByteSpan::text("条件クラス", 357, 358),
    ByteSpan::text("テン指数", 358, 363),
    ByteSpan::text("ペース指数", 363, 368),
    ByteSpan::text("上がり指数", 368, 373),
    ByteSpan::text("位置指数", 373, 378),
    ByteSpan::text("ペース予想", 378, 379),
    ByteSpan::text("道中順位", 379, 381),
    ByteSpan::text("道中差", 381, 383),
    ByteSpan::text("道中内外", 383, 384),
    ByteSpan::text("後3F順位", 384, 386),
    ByteSpan::text("後3F差", 386, 388),
    ByteSpan::text("後3F内外", 388, 389),
    ByteSpan::text("ゴール順位", 389, 391),
    ByteSpan::text("ゴール差", 391, 393),
    ByteSpan::text("ゴール内外", 393, 394),
    ByteSpan::text("展開記号", 394, 395),
    ByteSpan::text("距離適性２", 395, 396),
    ByteSpan::text("枠確定馬体重", 396, 399),
    ByteSpan::text("枠確定馬体重増減", 399, 402),
    ByteSpan::text("取消フラグ", 402, 403),
    ByteSpan::text("性別コード", 403, 404),
    ByteSpan::text("馬主名", 404, 444),
    ByteSpan::text("馬主会コード", 444, 446),
    ByteSpan::text("馬記号コード", 446, 448),
    ByteSpan::text("激走順位", 448, 450),
    ByteSpan::text("LS指数順位", 450, 452),
    ByteSpan::text("テン指数順位", 452, 454),
    ByteSpan::text("ペース指数順位", 454, 456),
    ByteSpan::text("上がり指数順位", 456, 458),
    ByteSpan::text("位置指数順位", 458, 460),
    ByteSpan::text("騎手期待単勝率", 460, 464),
    ByteSpan::text("騎手期待３着内率", 464, 468),
    ByteSpan::text("輸送区分", 468, 469),
    ByteSpan::text("走法", 469, 477),
    ByteSpan::text("体型", 477, 501),
    ByteSpan::text("体型総合１", 501, 504),
    ByteSpan::text("体型総合２", 504, 507),
    ByteSpan::text("体型総合３", 507, 510),
    ByteSpan::text("馬特記１", 510, 513),
    ByteSpan::text("馬特記２", 513, 516),
    ByteSpan::text("馬特記３", 516, 519),
    ByteSpan::text("馬スタート指数", 519, 523),
    ByteSpan::text("馬出遅率", 523, 527),
    ByteSpan::text("参考前走", 527, 529),
    ByteSpan::text("参考前走騎手コード", 529, 534),
    ByteSpan::text("万券指数", 534, 537),
    ByteSpan::text("万券印", 537, 538),
    ByteSpan::text("降級フラグ", 538, 539),
    ByteSpan::text("激走タイプ", 539, 541),
    ByteSpan::text("休養理由分類コード", 541, 543),
    ByteSpan::text("フラグ", 543, 559),
    ByteSpan::text("入厩何走目", 559, 561),
    ByteSpan::text("入厩年月日", 561, 569),
    ByteSpan::text("入厩何日前", 569, 572),
    ByteSpan::text("放牧先", 572, 622),
    ByteSpan::text("放牧先ランク", 622, 623),
    ByteSpan::text("厩舎ランク", 623, 624),
    ByteSpan::text("予備7", 624, 1022),
];
assertcp_eq!(spans_end(KYI_SPANS), KYI_LINE_LENGTH);

pub const KYI_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::KYI,
    line_length: KYI_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: KYI_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// KZA 騎手データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const KZA_LINE_LENGTH: usize = 270;

pub const KZA_SPANS: &[ByteSpan] = &[
    ByteSpan::text("騎手コード", 0, 5),
    ByteSpan::text("登録抹消フラグ", 5, 6),
    ByteSpan::text("登録抹消年月日", 6, 14),
    ByteSpan::text("騎手名", 14, 26),
    ByteSpan::text("騎手カナ", 26, 56),
    ByteSpan::text("騎手名略称", 56, 62),
    ByteSpan::text("所属コード", 62, 63),
    ByteSpan::text("所属地域名", 63, 67),
    ByteSpan::text("生年月日", 67, 75),
    ByteSpan::text("初免許年", 75, 79),
    ByteSpan::text("見習い区分", 79, 80),
    ByteSpan::text("所属厩舎", 80, 85),
    ByteSpan::text("騎手コメント", 85, 125),
    ByteSpan::text("コメント入力年月日", 125, 133),
    ByteSpan::text("本年リーディング", 133, 136),
    ByteSpan::text("本年平地成績", 136, 148),
    ByteSpan::text("本年障害成績", 148, 160),
    ByteSpan::text("本年特別勝数", 160, 163),
    ByteSpan::text("本年重賞勝数", 163, 166),
    ByteSpan::text("昨年リーディング", 166, 169),
    ByteSpan::text("昨年平地成績", 169, 181),
    ByteSpan::text("昨年障害成績", 181, 193),
    ByteSpan::text("昨年特別勝数", 193, 196),
    ByteSpan::text("昨年重賞勝数", 196, 199),
    ByteSpan::text("通算平地成績", 199, 219),
    ByteSpan::text("通算障害成績", 219, 239),
    ByteSpan::text("データ年月日", 239, 247),
    ByteSpan::text("予備", 247, 270),
];
assertcp_eq!(spans_end(KZA_SPANS), KZA_LINE_LENGTH);

pub const KZA_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::KZA,
    line_length: KZA_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: KZA_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MZA 抹消馬データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const MZA_LINE_LENGTH: usize = 14;

pub const MZA_SPANS: &[ByteSpan] = &[
    ByteSpan::text("血統登録番号", 0, 8),
    ByteSpan::text("予備", 8, 14),
];
assertcp_eq!(spans_end(MZA_SPANS), MZA_LINE_LENGTH);

pub const MZA_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::MZA,
    line_length: MZA_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: MZA_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// odds: OT OU OV OW OZ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Each odds record is the race key, 登録頭数, and one or more blocks of
// fixed-width odds entries in combination order.

pub const OT_LINE_LENGTH: usize = 4910;

/// ３連複オッズ, 816 entries of 6 bytes.
pub const OT_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("登録頭数", 8, 10),
    ByteSpan::group("３連複オッズ", 10, 4906, 6),
    ByteSpan::text("予備", 4906, 4910),
];
assertcp_eq!(spans_end(OT_SPANS), OT_LINE_LENGTH);
assertcp!(repeated_groups_divide(OT_SPANS), "OT repeated group width does not divide its span");

pub const OT_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::OT,
    line_length: OT_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: OT_SPANS,
};

pub const OU_LINE_LENGTH: usize = 1854;

/// 馬単オッズ, 306 entries of 6 bytes.
pub const OU_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("登録頭数", 8, 10),
    ByteSpan::group("馬単オッズ", 10, 1846, 6),
    ByteSpan::text("予備", 1846, 1854),
];
assertcp_eq!(spans_end(OU_SPANS), OU_LINE_LENGTH);
assertcp!(repeated_groups_divide(OU_SPANS), "OU repeated group width does not divide its span");

pub const OU_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::OU,
    line_length: OU_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: OU_SPANS,
};

pub const OV_LINE_LENGTH: usize = 34286;

/// ３連単オッズ, 4896 entries of 7 bytes.
pub const OV_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("登録頭数", 8, 10),
    ByteSpan::group("３連単オッズ", 10, 34282, 7),
    ByteSpan::text("予備", 34282, 34286),
];
assertcp_eq!(spans_end(OV_SPANS), OV_LINE_LENGTH);
assertcp!(repeated_groups_divide(OV_SPANS), "OV repeated group width does not divide its span");

pub const OV_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::OV,
    line_length: OV_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: OV_SPANS,
};

pub const OW_LINE_LENGTH: usize = 778;

/// ワイドオッズ, 153 entries of 5 bytes.
pub const OW_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("登録頭数", 8, 10),
    ByteSpan::group("ワイドオッズ", 10, 775, 5),
    ByteSpan::text("予備", 775, 778),
];
assertcp_eq!(spans_end(OW_SPANS), OW_LINE_LENGTH);
assertcp!(repeated_groups_divide(OW_SPANS), "OW repeated group width does not divide its span");

pub const OW_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::OW,
    line_length: OW_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: OW_SPANS,
};

pub const OZ_LINE_LENGTH: usize = 955;

/// 単勝 and 複勝 for 18 horses, then 153 連勝 (quinella) entries.
pub const OZ_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("登録頭数", 8, 10),
    ByteSpan::group("単勝オッズ", 10, 100, 5),
    ByteSpan::group("複勝オッズ", 100, 190, 5),
    ByteSpan::group("連勝オッズ", 190, 955, 5),
];
assertcp_eq!(spans_end(OZ_SPANS), OZ_LINE_LENGTH);
assertcp!(repeated_groups_divide(OZ_SPANS), "OZ repeated group width does not divide its span");

pub const OZ_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::OZ,
    line_length: OZ_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: OZ_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SED ZED 成績データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const SED_LINE_LENGTH: usize = 374;

/// Shared by `SED` and its preliminary twin `ZED`.
pub const SED_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("馬番", 8, 10),
    ByteSpan::text("血統登録番号", 10, 18),
    ByteSpan::text("年月日", 18, 26),
    ByteSpan::text("馬名", 26, 62),
    ByteSpan::text("距離", 62, 66),
    ByteSpan::text("芝ダ障害コード", 66, 67),
    ByteSpan::text("右左", 67, 68),
    ByteSpan::text("内外", 68, 69),
    ByteSpan::text("馬場状態", 69, 71),
    ByteSpan::text("種別", 71, 73),
    ByteSpan::text("条件", 73, 75),
    ByteSpan::text("記号", 75, 78),
    ByteSpan::text("重量", 78, 79),
    ByteSpan::text("グレード", 79, 80),
    ByteSpan::text("レース名", 80, 130),
    ByteSpan::text("頭数", 130, 132),
    ByteSpan::text("レース名略称", 132, 140),
    ByteSpan::text("着順", 140, 142),
    ByteSpan::text("異常区分", 142, 143),
    ByteSpan::text("タイム", 143, 147),
    ByteSpan::text("斤量", 147, 150),
    ByteSpan::text("騎手名", 150, 162),
    ByteSpan::text("調教師名", 162, 174),
    ByteSpan::text("確定単勝オッズ", 174, 180),
    ByteSpan::text("確定単勝人気順位", 180, 182),
    ByteSpan::text("ＩＤＭ", 182, 185),
    ByteSpan::text("素点", 185, 188),
    ByteSpan::text("馬場差", 188, 191),
    ByteSpan::text("ペース", 191, 194),
    ByteSpan::text("出遅", 194, 197),
    ByteSpan::text("位置取", 197, 200),
    ByteSpan::text("不利", 200, 203),
    ByteSpan::text("前不利", 203, 206),
    ByteSpan::text("中不利", 206, 209),
    ByteSpan::text("後不利", 209, 212),
    ByteSpan::text("レース", 212, 215),
    ByteSpan::text("コース取り", 215, 216),
    ByteSpan::text("上昇度コード", 216, 217),
    ByteSpan::text("クラスコード", 217, 219),
    ByteSpan::text("馬体コード", 219, 220),
    ByteSpan::text("気配コード", 220, 221),
    ByteSpan::text("レースペース", 221, 222),
    ByteSpan::text("馬ペース", 222, 223),
    ByteSpan::text("テン指数", 223, 228),
    ByteSpan::text("上がり指数", 228, 233),
    ByteSpan::text("ペース指数", 233, 238),
    ByteSpan::text("レースＰ指数", 238, 243),
    ByteSpan::text("1(2)着馬名", 243, 255),
    ByteSpan::text("1(2)着タイム差", 255, 258),
    ByteSpan::text("前３Ｆタイム", 258, 261),
    ByteSpan::text("後３Ｆタイム", 261, 264),
    ByteSpan::text("備考", 264, 288),
    ByteSpan::text("予備", 288, 290),
    ByteSpan::text("確定複勝オッズ下", 290, 296),
    ByteSpan::text("10時単勝オッズ", 296, 302),
    ByteSpan::text("10時複勝オッズ", 302, 308),
    ByteSpan::text("コーナー順位１", 308, 310),
    ByteSpan::text("コーナー順位２", 310, 312),
    ByteSpan::text("コーナー順位３", 312, 314),
    ByteSpan::text("コーナー順位４", 314, 316),
    ByteSpan::text("前３Ｆ先頭差", 316, 319),
    ByteSpan::text("後３Ｆ先頭差", 319, 322),
    ByteSpan::text("騎手コード", 322, 327),
    ByteSpan::text("調教師コード", 327, 332),
    ByteSpan::text("馬体重", 332, 335),
    ByteSpan::text("馬体重増減", 335, 338),
    ByteSpan::text("天候コード", 338, 339),
    ByteSpan::text("コース", 339, 340),
    ByteSpan::text("レース脚質", 340, 341),
    ByteSpan::text("単勝", 341, 348),
    ByteSpan::text("複勝", 348, 355),
    ByteSpan::text("本賞金", 355, 360),
    ByteSpan::text("収得賞金", 360, 365),
    ByteSpan::text("レースペース流れ", 365, 367),
    ByteSpan::text("馬ペース流れ", 367, 369),
    ByteSpan::text("４角コース取り", 369, 370),
    ByteSpan::text("発走時間", 370, 374),
];
assertcp_eq!(spans_end(SED_SPANS), SED_LINE_LENGTH);

pub const SED_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::SED,
    line_length: SED_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: SED_SPANS,
};

pub const ZED_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::ZED,
    line_length: SED_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: SED_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SKB ZKB 成績拡張データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const SKB_LINE_LENGTH: usize = 272;

/// Shared by `SKB` and its preliminary twin `ZKB`.
pub const SKB_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::text("馬番", 8, 10),
    ByteSpan::text("血統登録番号", 10, 18),
    ByteSpan::text("年月日", 18, 26),
    ByteSpan::group("特記コード", 26, 44, 3),
    ByteSpan::group("馬具コード", 44, 68, 3),
    ByteSpan::text("脚元コード_総合", 68, 71),
    ByteSpan::text("脚元コード_左前", 71, 74),
    ByteSpan::text("脚元コード_右前", 74, 77),
    ByteSpan::text("脚元コード_左後", 77, 80),
    ByteSpan::text("脚元コード_右後", 80, 83),
    ByteSpan::text("パドックコメント", 83, 123),
    ByteSpan::text("脚元コメント", 123, 163),
    ByteSpan::text("馬具(その他)コメント", 163, 203),
    ByteSpan::text("レースコメント", 203, 243),
    ByteSpan::text("ハミ", 243, 246),
    ByteSpan::text("バンテージ", 246, 249),
    ByteSpan::text("蹄鉄", 249, 252),
    ByteSpan::text("蹄状態", 252, 255),
    ByteSpan::text("ソエ", 255, 258),
    ByteSpan::text("骨瘤", 258, 261),
    ByteSpan::text("予備", 261, 272),
];
assertcp_eq!(spans_end(SKB_SPANS), SKB_LINE_LENGTH);
assertcp!(repeated_groups_divide(SKB_SPANS), "SKB repeated group width does not divide its span");

pub const SKB_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::SKB,
    line_length: SKB_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: SKB_SPANS,
};

pub const ZKB_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::ZKB,
    line_length: SKB_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: SKB_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SRB 成績レースデータ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const SRB_LINE_LENGTH: usize = 851;

/// Byte 8 is not declared and is skipped.
pub const SRB_SPANS: &[ByteSpan] = &[
    ByteSpan::text("場コード", 0, 2),
    ByteSpan::text("年", 2, 4),
    ByteSpan::text("回", 4, 5),
    ByteSpan::hex_digit("日", 5, 6),
    ByteSpan::text("Ｒ", 6, 8),
    ByteSpan::group("ハロンタイム", 9, 63, 3),
    ByteSpan::text("１コーナー", 63, 127),
    ByteSpan::text("２コーナー", 127, 191),
    ByteSpan::text("３コーナー", 191, 255),
    ByteSpan::text("４コーナー", 255, 319),
    ByteSpan::group("ペースアップ位置", 319, 321, 1),
    ByteSpan::text("１角", 321, 324),
    ByteSpan::text("２角", 324, 327),
    ByteSpan::text("向正", 327, 330),
    ByteSpan::text("３角", 330, 333),
    ByteSpan::text("４角", 333, 338),
    ByteSpan::text("直線", 338, 343),
    ByteSpan::text("レースコメント", 343, 843),
    ByteSpan::text("予備", 843, 851),
];
assertcp_eq!(spans_end(SRB_SPANS), SRB_LINE_LENGTH);
assertcp!(repeated_groups_divide(SRB_SPANS), "SRB repeated group width does not divide its span");

pub const SRB_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::SRB,
    line_length: SRB_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: SRB_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// UKC 馬基本データ
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub const UKC_LINE_LENGTH: usize = 290;

pub const UKC_SPANS: &[ByteSpan] = &[
    ByteSpan::text("血統登録番号", 0, 8),
    ByteSpan::text("馬名", 8, 44),
    ByteSpan::text("性別コード", 44, 45),
    ByteSpan::text("毛色コード", 45, 47),
    ByteSpan::text("馬記号コード", 47, 49),
    ByteSpan::text("父馬名", 49, 85),
    ByteSpan::text("母馬名", 85, 121),
    ByteSpan::text("母父馬名", 121, 157),
    ByteSpan::text("生年月日", 157, 165),
    ByteSpan::text("父馬生年", 165, 169),
    ByteSpan::text("母馬生年", 169, 173),
    ByteSpan::text("母父馬生年", 173, 177),
    ByteSpan::text("馬主名", 177, 217),
    ByteSpan::text("馬主会コード", 217, 219),
    ByteSpan::text("生産者名", 219, 259),
    ByteSpan::text("産地名", 259, 267),
    ByteSpan::text("登録抹消フラグ", 267, 268),
    ByteSpan::text("データ年月日", 268, 276),
    ByteSpan::text("父系統コード", 276, 280),
    ByteSpan::text("母父系統コード", 280, 284),
    ByteSpan::text("予備", 284, 290),
];
assertcp_eq!(spans_end(UKC_SPANS), UKC_LINE_LENGTH);

pub const UKC_LAYOUT: FieldLayout = FieldLayout {
    record_type: RecordTypeTag::UKC,
    line_length: UKC_LINE_LENGTH,
    encoding: TextEncoding::Detect,
    spans: UKC_SPANS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// lookup
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The layout for `record_type`. Every tag has exactly one layout.
pub fn layout_of(record_type: RecordTypeTag) -> &'static FieldLayout {
    match record_type {
        RecordTypeTag::BAC => &BAC_LAYOUT,
        RecordTypeTag::CHA => &CHA_LAYOUT,
        RecordTypeTag::CYB => &CYB_LAYOUT,
        RecordTypeTag::CZA => &CZA_LAYOUT,
        RecordTypeTag::JOA => &JOA_LAYOUT,
        RecordTypeTag::KAB => &KAB_LAYOUT,
        RecordTypeTag::KKA => &KKA_LAYOUT,
        RecordTypeTag::KYI => &KYI_LAYOUT,
        RecordTypeTag::KZA => &KZA_LAYOUT,
        RecordTypeTag::MZA => &MZA_LAYOUT,
        RecordTypeTag::OT => &OT_LAYOUT,
        RecordTypeTag::OU => &OU_LAYOUT,
        RecordTypeTag::OV => &OV_LAYOUT,
        RecordTypeTag::OW => &OW_LAYOUT,
        RecordTypeTag::OZ => &OZ_LAYOUT,
        RecordTypeTag::SED => &SED_LAYOUT,
        RecordTypeTag::SKB => &SKB_LAYOUT,
        RecordTypeTag::SRB => &SRB_LAYOUT,
        RecordTypeTag::UKC => &UKC_LAYOUT,
        RecordTypeTag::ZED => &ZED_LAYOUT,
        RecordTypeTag::ZKB => &ZKB_LAYOUT,
    }
}
