use super::*;

#[test]
fn web_mail_and_phone_urls_are_safe() {
    assert!(is_safe_url("https://example.com/a?b=c"));
    assert!(is_safe_url("HTTP://EXAMPLE.COM"));
    assert!(is_safe_url("mailto:ada@example.com"));
    assert!(is_safe_url("tel:+15551234"));
}

#[test]
fn relative_and_fragment_urls_are_safe() {
    assert!(is_safe_url("#contact"));
    assert!(is_safe_url("img/profile.png"));
    assert!(is_safe_url("/docs/cv.pdf"));
    assert!(is_safe_url("./a:b"));
    assert!(is_safe_url("?q=1:2"));
}

#[test]
fn script_urls_are_blocked() {
    assert!(!is_safe_url("javascript:alert(1)"));
    assert!(!is_safe_url("  JavaScript:alert(1)"));
    assert!(!is_safe_url("data:text/html;base64,xx"));
    assert!(!is_safe_url("java\tscript:alert(1)"));
    assert!(!is_safe_url("java script:alert(1)"));
}

#[test]
fn safe_url_replaces_blocked_destinations() {
    assert_eq!(safe_url(" https://a.b "), "https://a.b");
    assert_eq!(safe_url("javascript:void(0)"), BLOCKED_URL);
}

#[test]
fn class_list_strips_injection_characters() {
    assert_eq!(class_list("btn--primary  extra"), "btn--primary extra");
    assert_eq!(class_list("x\" onclick=\"y"), "x onclicky");
    assert_eq!(class_list("   "), "");
}

#[test]
fn display_url_drops_scheme_and_trailing_slash() {
    assert_eq!(display_url("https://linkedin.com/in/ada/"), "linkedin.com/in/ada");
    assert_eq!(display_url("http://x.io"), "x.io");
    assert_eq!(display_url("linkedin.com/in/ada"), "linkedin.com/in/ada");
}
