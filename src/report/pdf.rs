//! Single-page PDF export using the standard Helvetica fonts.
//!
//! Text is written in WinAnsiEncoding. Characters the encoding cannot hold
//! are replaced (full-width punctuation by its ASCII twin, anything else by
//! `?`), so arbitrary advice text always renders. Lines are wrapped on the
//! measured glyph widths of the font they are set in.

use crate::food::analysis::nutrition::CaloricBreakdown;
use crate::report::{ReportError, ReportInput, ReportRenderer};
use chrono::Utc;
use std::io::Write;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 56.0;
const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const BODY_SIZE: f32 = 11.0;
const NAME_SIZE: f32 = 13.0;
const LINE_HEIGHT: f32 = 15.0;
const MAX_ADVICE_LINES: usize = 30;
const REPORT_TITLE: &str = "Nutrition Report";

// Pie colours from the dashboard chart.
const PROTEIN_RGB: (f32, f32, f32) = (0.180, 0.800, 0.443);
const FAT_RGB: (f32, f32, f32) = (1.000, 0.498, 0.055);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }

    /// Advance width of a WinAnsi code in thousandths of the font size.
    fn glyph_width(self, code: u8) -> u16 {
        if code < 0x20 {
            return 0;
        }
        let table = match self {
            Font::Regular => &HELVETICA_WIDTHS,
            Font::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        table[usize::from(code - 0x20)]
    }

    fn width_of(self, size: f32, text: &str) -> f32 {
        self.width_of_codes(size, &encode(text))
    }

    fn width_of_codes(self, size: f32, codes: &[u8]) -> f32 {
        let units: u32 = codes.iter().map(|&c| u32::from(self.glyph_width(c))).sum();
        units as f32 * size / 1000.0
    }
}

// Standard Type 1 metrics for WinAnsi codes 0x20..=0xFF. Unassigned codes are 0.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

#[derive(Debug, Clone, Default)]
pub struct PdfReport;

impl PdfReport {
    pub fn new() -> Self {
        Self
    }

    fn page_content(&self, input: &ReportInput<'_>) -> Vec<u8> {
        let breakdown = CaloricBreakdown::from_grams(input.protein_grams, input.fat_grams);
        let (protein_share, fat_share) = breakdown.shares();
        let mut page = ContentBuilder::new(PAGE_HEIGHT - MARGIN - 20.0);

        page.text(Font::Bold, 20.0, REPORT_TITLE);
        page.advance(LINE_HEIGHT * 0.5);
        page.text(
            Font::Regular,
            9.0,
            &format!("Generated {}", Utc::now().format("%Y-%m-%d %H:%M UTC")),
        );
        page.advance(LINE_HEIGHT);

        let name = sanitize(&format!("Food: {}", input.food_name));
        for line in wrap(&name, Font::Bold, NAME_SIZE, TEXT_WIDTH) {
            page.text(Font::Bold, NAME_SIZE, &line);
        }
        page.text(
            Font::Regular,
            BODY_SIZE,
            &format!("Protein: {} g per 100 g", input.protein_grams),
        );
        page.text(
            Font::Regular,
            BODY_SIZE,
            &format!("Fat: {} g per 100 g", input.fat_grams),
        );
        page.advance(LINE_HEIGHT * 0.5);

        page.text(Font::Bold, 12.0, "Energy breakdown");
        page.text(
            Font::Regular,
            BODY_SIZE,
            &format!(
                "Protein: {:.1} kcal ({:.1}%)    Fat: {:.1} kcal ({:.1}%)",
                breakdown.protein_kcal, protein_share, breakdown.fat_kcal, fat_share
            ),
        );
        page.share_bar(protein_share, fat_share);
        page.advance(LINE_HEIGHT);

        page.text(Font::Bold, 12.0, "Coach's advice");
        let mut lines = wrap(&sanitize(input.advice), Font::Regular, BODY_SIZE, TEXT_WIDTH);
        if lines.len() > MAX_ADVICE_LINES {
            lines.truncate(MAX_ADVICE_LINES);
            if let Some(last) = lines.last_mut() {
                while !last.is_empty()
                    && Font::Regular.width_of(BODY_SIZE, &format!("{} ...", last)) > TEXT_WIDTH
                {
                    last.pop();
                }
                last.push_str(" ...");
            }
        }
        for line in &lines {
            page.text(Font::Regular, BODY_SIZE, line);
        }

        page.finish()
    }
}

impl ReportRenderer for PdfReport {
    fn render(&self, input: &ReportInput<'_>) -> Result<Vec<u8>, ReportError> {
        let content = self.page_content(input);

        let mut objects: Vec<Vec<u8>> = Vec::new();
        objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
        objects.push(b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec());
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>",
                PAGE_WIDTH, PAGE_HEIGHT
            )
            .into_bytes(),
        );
        objects.push(font_object(Font::Regular));
        objects.push(font_object(Font::Bold));

        let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        stream.extend_from_slice(&content);
        stream.extend_from_slice(b"\nendstream");
        objects.push(stream);

        objects.push(
            format!(
                "<< /Title {} /Producer (nutrition-advisor) >>",
                info_string(&format!("{}: {}", REPORT_TITLE, input.food_name))
            )
            .into_bytes(),
        );

        Ok(assemble(&objects))
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn file_extension(&self) -> &'static str {
        "pdf"
    }
}

fn font_object(font: Font) -> Vec<u8> {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        font.base_font()
    )
    .into_bytes()
}

/// Info dictionary strings are not WinAnsi, so they go out as UTF-16BE
/// with a byte order mark.
fn info_string(text: &str) -> String {
    let mut hex = String::from("<FEFF");
    for unit in text.encode_utf16() {
        hex.push_str(&format!("{:04X}", unit));
    }
    hex.push('>');
    hex
}

/// Lays out numbered objects, the cross-reference table and the trailer.
/// The info dictionary is expected last.
fn assemble(objects: &[Vec<u8>]) -> Vec<u8> {
    let mut out: Vec<u8> = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());

    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        // Writing into a Vec cannot fail.
        let _ = write!(out, "{} 0 obj\n", index + 1);
        out.extend_from_slice(body);
        out.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = out.len();
    let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        let _ = write!(out, "{:010} 00000 n \n", offset);
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        objects.len(),
        xref_offset
    );
    out
}

struct ContentBuilder {
    ops: Vec<u8>,
    y: f32,
}

impl ContentBuilder {
    fn new(top: f32) -> Self {
        Self {
            ops: Vec::new(),
            y: top,
        }
    }

    fn advance(&mut self, by: f32) {
        self.y -= by;
    }

    /// One line of text at the cursor. `text` may contain any characters.
    fn text(&mut self, font: Font, size: f32, text: &str) {
        if self.y < MARGIN {
            return;
        }
        let _ = write!(
            self.ops,
            "BT /{} {} Tf {} {:.1} Td (",
            font.resource(),
            size,
            MARGIN,
            self.y
        );
        self.ops.extend_from_slice(&escape(&encode(&sanitize(text))));
        self.ops.extend_from_slice(b") Tj ET\n");
        self.advance(size.max(BODY_SIZE) + (LINE_HEIGHT - BODY_SIZE));
    }

    /// Horizontal bar split into protein and fat shares.
    fn share_bar(&mut self, protein_share: f64, fat_share: f64) {
        let height = 14.0;
        let y = self.y - height + BODY_SIZE;
        let protein_width = TEXT_WIDTH * (protein_share / 100.0) as f32;
        let fat_width = TEXT_WIDTH * (fat_share / 100.0) as f32;

        if protein_share + fat_share <= 0.0 {
            let _ = write!(
                self.ops,
                "0.85 0.85 0.85 rg {} {:.1} {} {} re f\n",
                MARGIN, y, TEXT_WIDTH, height
            );
        } else {
            let (r, g, b) = PROTEIN_RGB;
            let _ = write!(
                self.ops,
                "{} {} {} rg {} {:.1} {:.1} {} re f\n",
                r, g, b, MARGIN, y, protein_width, height
            );
            let (r, g, b) = FAT_RGB;
            let _ = write!(
                self.ops,
                "{} {} {} rg {:.1} {:.1} {:.1} {} re f\n",
                r, g, b, MARGIN + protein_width, y, fat_width, height
            );
        }
        self.ops.extend_from_slice(b"0 0 0 rg\n");
        self.advance(height + 6.0);
    }

    fn finish(self) -> Vec<u8> {
        self.ops
    }
}

/// Replaces characters WinAnsiEncoding cannot represent.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c if winansi_byte(c).is_some() => Some(c),
            '，' | '、' => Some(','),
            '。' => Some('.'),
            '！' => Some('!'),
            '？' => Some('?'),
            '：' => Some(':'),
            '；' => Some(';'),
            '（' => Some('('),
            '）' => Some(')'),
            '\u{3000}' => Some(' '),
            '\u{200B}'..='\u{200D}' | '\u{FE0F}' => None,
            _ => Some('?'),
        })
        .collect()
}

fn encode(text: &str) -> Vec<u8> {
    text.chars().map(|c| winansi_byte(c).unwrap_or(b'?')).collect()
}

fn escape(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        if matches!(b, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(b);
    }
    out
}

fn winansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        ' '..='~' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Greedy word wrap on measured width. Words wider than a line are split.
fn wrap(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let fits = |line: &str| font.width_of(size, line) <= max_width;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if fits(&candidate) {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        for c in word.chars() {
            current.push(c);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(name: &'a str, advice: &'a str) -> ReportInput<'a> {
        ReportInput {
            food_name: name,
            protein_grams: 23.0,
            fat_grams: 1.0,
            advice,
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    /// Font, size and raw string codes of every text line in a content stream.
    fn shown_lines(content: &[u8]) -> Vec<(Font, f32, Vec<u8>)> {
        let mut shown = Vec::new();
        for line in content.split(|&b| b == b'\n') {
            if !line.starts_with(b"BT /") {
                continue;
            }
            let header_end = line.windows(4).position(|w| w == b"Td (").unwrap();
            let header = std::str::from_utf8(&line[..header_end]).unwrap();
            let mut parts = header.split_whitespace();
            parts.next();
            let font = match parts.next().unwrap() {
                "/F1" => Font::Regular,
                "/F2" => Font::Bold,
                other => panic!("unknown font {}", other),
            };
            let size: f32 = parts.next().unwrap().parse().unwrap();

            let body = &line[header_end + 4..line.len() - b") Tj ET".len()];
            let mut codes = Vec::new();
            let mut escaped = false;
            for &b in body {
                if b == b'\\' && !escaped {
                    escaped = true;
                    continue;
                }
                escaped = false;
                codes.push(b);
            }
            shown.push((font, size, codes));
        }
        shown
    }

    #[test]
    fn test_renders_a_complete_pdf() {
        let bytes = PdfReport::new()
            .render(&input("Chicken Breast", "Lean protein, eat freely."))
            .unwrap();

        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
        assert!(contains(&bytes, b"(Food: Chicken Breast) Tj"));
        assert!(contains(&bytes, b"Protein: 92.0 kcal \\(91.1%\\)"));
        assert!(contains(&bytes, b"(Lean protein, eat freely.) Tj"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = PdfReport::new().render(&input("Egg", "Fine.")).unwrap();

        let marker = b"startxref\n";
        let start = bytes.windows(marker.len()).rposition(|w| w == marker).unwrap() + marker.len();
        let tail = std::str::from_utf8(&bytes[start..]).unwrap();
        let xref_at: usize = tail.lines().next().unwrap().parse().unwrap();

        let xref = std::str::from_utf8(&bytes[xref_at..]).unwrap();
        assert!(xref.starts_with("xref\n0 8\n"));

        let entries: Vec<usize> = xref
            .lines()
            .skip(3)
            .take(7)
            .map(|l| l[..10].parse().unwrap())
            .collect();
        assert_eq!(entries.len(), 7);
        for (index, offset) in entries.iter().enumerate() {
            let header = format!("{} 0 obj", index + 1);
            assert_eq!(&bytes[*offset..*offset + header.len()], header.as_bytes());
        }
    }

    #[test]
    fn test_unsupported_characters_do_not_fail_the_render() {
        let advice = "鸡胸肉是减脂期的好朋友！💪 Très bien — “lean”.";
        let bytes = PdfReport::new().render(&input("鸡胸肉 (Chicken)", advice)).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"(Food: ??? \\(Chicken\\)) Tj"));
        // é, em dash and curly quotes survive as WinAnsi bytes.
        assert!(contains(&bytes, b"Tr\xE8s bien \x97 \x93lean\x94."));
    }

    #[test]
    fn test_info_title_is_utf16() {
        let bytes = PdfReport::new()
            .render(&input("Crème brûlée — “classic” 鸡", "Sweet."))
            .unwrap();

        // "Nu..." after the byte order mark.
        assert!(contains(&bytes, b"/Title <FEFF004E0075"));
        // è, em dash, left curly quote and a CJK character keep their code points.
        for unit in [&b"00E8"[..], b"2014", b"201C", b"9E21"] {
            assert!(contains(&bytes, unit), "missing {:?}", std::str::from_utf8(unit));
        }
        let info_at = bytes.windows(7).rposition(|w| w == b"/Title ").unwrap();
        let info_end = info_at + bytes[info_at..].iter().position(|&b| b == b'>').unwrap();
        assert!(bytes[info_at..info_end].iter().all(|b| b.is_ascii()));
    }

    #[test]
    fn test_sanitize_maps_fullwidth_punctuation() {
        assert_eq!(sanitize("好，很好。"), "?,??.");
        assert_eq!(sanitize("a\tb\nc"), "a b c");
        assert_eq!(sanitize("x\u{7}y"), "xy");
        assert_eq!(sanitize("café"), "café");
    }

    #[test]
    fn test_glyph_widths_follow_helvetica_metrics() {
        assert_eq!(Font::Regular.glyph_width(b'i'), 222);
        assert_eq!(Font::Bold.glyph_width(b'i'), 278);
        assert_eq!(Font::Regular.glyph_width(b'M'), 833);
        assert_eq!(Font::Regular.glyph_width(0x97), 1000);
        assert_eq!(Font::Bold.glyph_width(0xE9), 556);
        assert!((Font::Regular.width_of(10.0, "Mi") - 10.55).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_breaks_on_measured_width() {
        let width = Font::Regular.width_of(10.0, "aaa bbb");
        assert_eq!(wrap("aaa bbb ccc", Font::Regular, 10.0, width), vec!["aaa bbb", "ccc"]);

        // 'W' is 9.44pt at 10pt, so three fit in 30pt.
        assert_eq!(
            wrap("WWWWWWWWWW", Font::Regular, 10.0, 30.0),
            vec!["WWW", "WWW", "WWW", "W"]
        );
        // Narrow letters pack more per line than wide ones.
        let narrow = wrap(&"il ".repeat(60), Font::Regular, BODY_SIZE, TEXT_WIDTH);
        let wide = wrap(&"MW ".repeat(60), Font::Regular, BODY_SIZE, TEXT_WIDTH);
        assert!(narrow.len() < wide.len());
        assert!(wrap("   ", Font::Regular, 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_every_line_stays_inside_the_margins() {
        let name = "Beef, loin, top loin steak, boneless, lip off, separable lean only, \
                    trimmed to 0 fat, choice, raw";
        let advice = "EAT THIS MOSTLY WHEN YOU WANT MAXIMUM MUSCLE WITH MINIMUM WAISTLINE \
                      GROWTH, WHICH IS ALWAYS. ".repeat(6);
        let content = PdfReport::new().page_content(&input(name, &advice));

        let lines = shown_lines(&content);
        assert!(lines.iter().filter(|(font, _, _)| *font == Font::Bold).count() >= 4);
        for (font, size, codes) in &lines {
            let width = font.width_of_codes(*size, codes);
            assert!(
                width <= TEXT_WIDTH,
                "{:.1}pt line overflows: {}",
                width,
                String::from_utf8_lossy(codes)
            );
        }
    }

    #[test]
    fn test_long_advice_is_truncated() {
        let advice = "WORD ".repeat(2000);
        let content = PdfReport::new().page_content(&input("Rice", &advice));
        assert!(contains(&content, b" ...) Tj"));

        let lines = shown_lines(&content);
        let (font, size, last) = lines.last().unwrap();
        assert!(last.ends_with(b" ..."));
        assert!(font.width_of_codes(*size, last) <= TEXT_WIDTH);
    }

    #[test]
    fn test_zero_energy_food_still_renders() {
        let report = ReportInput {
            food_name: "Water",
            protein_grams: 0.0,
            fat_grams: 0.0,
            advice: "Stay hydrated.",
        };
        let bytes = PdfReport::new().render(&report).unwrap();
        assert!(contains(&bytes, b"(Nutrition Report) Tj"));
        assert!(contains(&bytes, b"\\(0.0%\\)"));
    }
}
