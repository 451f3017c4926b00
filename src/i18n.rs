// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持日文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "ja";

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"ja" 或 "en"），未知语言回退为 "ja"
pub fn set_locale(locale: &str) {
    if available_locales().contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!("不支持的语言: {}, 使用 {}", locale, DEFAULT_LOCALE);
        rust_i18n::set_locale(DEFAULT_LOCALE);
    }
}

/// 可用语言列表
pub fn available_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use airfare_deadline::i18n::t;
/// let msg = t("table.heading");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use airfare_deadline::i18n::t_with_args;
/// let msg = t_with_args("table.days_value", &[("days", "30")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

// rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
// 涉及 locale 的测试（含渲染测试）共用此锁串行化。
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
