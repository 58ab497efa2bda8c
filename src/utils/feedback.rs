//! 外部评分反馈的解码与渲染

use comrak::{Options, markdown_to_html};
use percent_encoding::percent_decode_str;

/// URL 解码（`+` 视为空格），非法 UTF-8 字节按替换字符处理
pub fn url_decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Markdown 转 HTML，原始 HTML 不会透传
pub fn markdown_to_safe_html(markdown: &str) -> String {
    markdown_to_html(markdown, &Options::default())
}

/// webservice `feedback` 参数 -> 存储用的 HTML
pub fn render_feedback(raw: &str) -> String {
    markdown_to_safe_html(&url_decode(raw))
}

/// 成绩册中指向学生成绩页的反馈链接
pub fn feedback_link(link_base: &str, assignment_id: i64, user_id: i64) -> String {
    format!(
        "<a href=\"{}/{assignment_id}/grades/{user_id}\">See feedback</a>",
        link_base.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode("All+tests%20passed%21"), "All tests passed!");
        assert_eq!(url_decode("%E2%9C%93"), "\u{2713}");
        assert_eq!(url_decode("plain"), "plain");
    }

    #[test]
    fn test_render_markdown() {
        let html = render_feedback("%23+Result%0A%0A**3**+of+4");
        assert!(html.contains("<h1>Result</h1>"));
        assert!(html.contains("<strong>3</strong> of 4"));
    }

    #[test]
    fn test_raw_html_is_not_passed_through() {
        let html = render_feedback("%3Cscript%3Ealert(1)%3C%2Fscript%3E");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_default_feedback() {
        assert_eq!(render_feedback("[]").trim(), "<p>[]</p>");
    }

    #[test]
    fn test_feedback_link() {
        assert_eq!(
            feedback_link("/api/v1/assignments/", 3, 7),
            "<a href=\"/api/v1/assignments/3/grades/7\">See feedback</a>"
        );
    }
}
