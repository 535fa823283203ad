//! Listing-text red flags (legal title and planning/dispute).
//!
//! Pattern sets are matched against the lowercased listing text; each set has
//! both the accented Vietnamese spelling and the unaccented one sellers often
//! type. Scores are three-valued:
//!
//! - `0.0` explicitly clean
//! - `0.5` not mentioned / ambiguous
//! - `1.0` explicit red flag
//!
//! Regexes compile once on first use.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Score when the text gives no usable signal.
pub const NEUTRAL_SIGNAL: f64 = 0.5;

/// A compiled pattern tagged with a stable id (used as a reason/flag name).
#[derive(Debug)]
pub struct Pattern {
    pub id: &'static str,
    re: Regex,
}

impl Pattern {
    fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }
}

fn compile(defs: &[(&'static str, &str)]) -> Vec<Pattern> {
    defs.iter()
        .map(|&(id, p)| Pattern {
            id,
            re: Regex::new(p).expect("listing rule regex"),
        })
        .collect()
}

static LEGAL_RISK: Lazy<Vec<Pattern>> = Lazy::new(|| {
    compile(&[
        ("vi_bang", r"vi\s*bằng"),
        ("giay_tay", r"giấy\s*tay"),
        ("giay_tay", r"giay\s*tay"),
        ("so_chung", r"sổ\s*chung"),
        ("so_chung", r"so\s*chung"),
        ("so_chung", r"chung\s*sổ"),
        ("chua_co_so", r"chưa\s*có\s*sổ"),
        ("chua_co_so", r"chua\s*co\s*so"),
        ("cho_so", r"chờ\s*sổ"),
        ("cho_so", r"cho\s*so"),
        ("hdmb", r"hđmb"),
        ("hdmb", r"hợp\s*đồng\s*mua\s*bán"),
        ("hdmb", r"hop\s*dong\s*mua\s*ban"),
        ("uy_quyen", r"ủy\s*quyền"),
        ("uy_quyen", r"uỷ\s*quyền"),
        ("uy_quyen", r"uy\s*quyen"),
        ("gop_von", r"góp\s*vốn"),
        ("gop_von", r"gop\s*von"),
        ("giay_viet_tay", r"giấy\s*viết\s*tay"),
        ("giay_viet_tay", r"giay\s*viet\s*tay"),
    ])
});

static LEGAL_CLEAR: Lazy<Vec<Pattern>> = Lazy::new(|| {
    compile(&[
        ("so_hong", r"sổ\s*hồng"),
        ("so_do", r"sổ\s*đỏ"),
        ("so_hong", r"so\s*hong"),
        ("so_do", r"so\s*do"),
        ("so_rieng", r"sổ\s*riêng"),
        ("so_rieng", r"so\s*rieng"),
        ("chinh_chu", r"chính\s*chủ"),
        ("chinh_chu", r"chinh\s*chu"),
        ("phap_ly_chuan", r"pháp\s*lý\s*chuẩn"),
        ("phap_ly_chuan", r"phap\s*ly\s*chuan"),
        ("hoan_cong", r"hoàn\s*công"),
        ("hoan_cong", r"hoan\s*cong"),
        ("cong_chung", r"công\s*chứng"),
        ("cong_chung", r"cong\s*chung"),
        ("sang_ten", r"sang\s*tên"),
        ("sang_ten", r"sang\s*ten"),
        ("dang_bo", r"đăng\s*bộ"),
        ("dang_bo", r"dang\s*bo"),
    ])
});

static PLANNING_KEYWORDS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    compile(&[
        ("quy_hoach", r"quy\s*hoạch"),
        ("quy_hoach", r"quy\s*hoach"),
        ("lo_gioi", r"lộ\s*giới"),
        ("lo_gioi", r"lo\s*gioi"),
        ("tranh_chap", r"tranh\s*chấp"),
        ("tranh_chap", r"tranh\s*chap"),
        ("giai_toa", r"giải\s*tỏa"),
        ("giai_toa", r"giai\s*toa"),
        ("treo", r"treo"),
    ])
});

static PLANNING_SAFE: Lazy<Vec<Pattern>> = Lazy::new(|| {
    compile(&[
        ("khong_dinh_quy_hoach", r"không\s*dính\s*quy\s*hoạch"),
        ("khong_dinh_quy_hoach", r"khong\s*dinh\s*quy\s*hoach"),
        ("khong_nam_trong_quy_hoach", r"không\s*nằm\s*trong\s*quy\s*hoạch"),
        ("khong_nam_trong_quy_hoach", r"khong\s*nam\s*trong\s*quy\s*hoach"),
        ("khong_quy_hoach", r"không\s*quy\s*hoạch"),
        ("khong_quy_hoach", r"khong\s*quy\s*hoach"),
        ("khong_lo_gioi", r"không\s*lộ\s*giới"),
        ("khong_lo_gioi", r"khong\s*lo\s*gioi"),
        ("khong_tranh_chap", r"không\s*tranh\s*chấp"),
        ("khong_tranh_chap", r"khong\s*tranh\s*chap"),
        ("khong_lo_gioi", r"không\s*bị\s*lộ\s*giới"),
        ("khong_lo_gioi", r"khong\s*bi\s*lo\s*gioi"),
        ("khong_quy_hoach", r"không\s*bị\s*quy\s*hoạch"),
        ("khong_quy_hoach", r"khong\s*bi\s*quy\s*hoach"),
        ("xac_nhan_quy_hoach", r"có\s*giấy\s*xác\s*nhận\s*quy\s*hoạch"),
        ("xac_nhan_quy_hoach", r"co\s*giay\s*xac\s*nhan\s*quy\s*hoach"),
        ("quy_hoach_on_dinh", r"quy\s*hoạch\s*ổn\s*định"),
        ("quy_hoach_on_dinh", r"quy\s*hoach\s*on\s*dinh"),
    ])
});

static PLANNING_RISK: Lazy<Vec<Pattern>> = Lazy::new(|| {
    compile(&[
        ("dinh_quy_hoach", r"dính\s*quy\s*hoạch"),
        ("dinh_quy_hoach", r"dinh\s*quy\s*hoach"),
        ("nam_trong_quy_hoach", r"nằm\s*trong\s*quy\s*hoạch"),
        ("nam_trong_quy_hoach", r"nam\s*trong\s*quy\s*hoach"),
        ("bi_quy_hoach", r"bị\s*quy\s*hoạch"),
        ("bi_quy_hoach", r"bi\s*quy\s*hoach"),
        ("quy_hoach_treo", r"quy\s*hoạch\s*treo"),
        ("quy_hoach_treo", r"quy\s*hoach\s*treo"),
        ("dang_tranh_chap", r"đang\s*tranh\s*chấp"),
        ("dang_tranh_chap", r"dang\s*tranh\s*chap"),
        ("tranh_chap", r"tranh\s*chấp"),
        ("tranh_chap", r"tranh\s*chap"),
        ("lo_gioi", r"lộ\s*giới"),
        ("lo_gioi", r"lo\s*gioi"),
        ("giai_toa", r"giải\s*tỏa"),
        ("giai_toa", r"giai\s*toa"),
    ])
});

/// Per-listing text signals with the flags that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSignals {
    pub legal: f64,
    pub planning: f64,
    /// Ids of red-flag patterns that matched (deduplicated, in rule order).
    pub flags: Vec<&'static str>,
}

/// Legal-title risk: red flag → 1.0, clean title → 0.0, else 0.5.
pub fn legal_risk_score(listing_text: &str) -> f64 {
    let t = normalize(listing_text);
    legal_on_normalized(&t)
}

/// Planning/dispute risk.
///
/// No planning keyword at all → 0.5 (information missing). A keyword that is
/// explicitly negated ("không quy hoạch") → 0.0. Red-flag phrasing → 1.0.
pub fn planning_risk_score(listing_text: &str) -> f64 {
    let t = normalize(listing_text);
    planning_on_normalized(&t)
}

/// Red-flag pattern ids that hit in `listing_text`.
pub fn matched_flags(listing_text: &str) -> Vec<&'static str> {
    let t = normalize(listing_text);
    flags_on_normalized(&t)
}

/// All text signals in one pass over the normalized text.
pub fn analyze_text(listing_text: &str) -> TextSignals {
    let t = normalize(listing_text);
    TextSignals {
        legal: legal_on_normalized(&t),
        planning: planning_on_normalized(&t),
        flags: flags_on_normalized(&t),
    }
}

// --- internals ---

fn legal_on_normalized(t: &str) -> f64 {
    if any_match(&LEGAL_RISK, t) {
        return 1.0;
    }
    if any_match(&LEGAL_CLEAR, t) {
        return 0.0;
    }
    NEUTRAL_SIGNAL
}

fn planning_on_normalized(t: &str) -> f64 {
    if !any_match(&PLANNING_KEYWORDS, t) {
        return NEUTRAL_SIGNAL;
    }
    if any_match(&PLANNING_SAFE, t) {
        return 0.0;
    }
    if any_match(&PLANNING_RISK, t) {
        return 1.0;
    }
    NEUTRAL_SIGNAL
}

fn flags_on_normalized(t: &str) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    let planning_safe = any_match(&PLANNING_SAFE, t);
    let sets: [&[Pattern]; 2] = [LEGAL_RISK.as_slice(), PLANNING_RISK.as_slice()];
    for (i, set) in sets.iter().enumerate() {
        // Planning red flags are void when the text explicitly says it's clean.
        if i == 1 && planning_safe {
            continue;
        }
        for p in set.iter() {
            if p.is_match(t) && !out.contains(&p.id) {
                out.push(p.id);
            }
        }
    }
    out
}

fn any_match(set: &[Pattern], text: &str) -> bool {
    set.iter().any(|p| p.is_match(text))
}

fn normalize(input: &str) -> String {
    input.to_lowercase()
}
