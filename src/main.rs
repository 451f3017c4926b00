// ==========================================
// 航空券割引締切日计算 - 主入口
// ==========================================
// 以默认表单值（搭乗日 = 今天 + 30 天, 両方, 全部プラン）
// 输出締切日一覧与注意事项
// ==========================================

use airfare_deadline::app::{render_notices, render_text_table, AppState};
use airfare_deadline::i18n::{t, t_with_args};
use airfare_deadline::DeadlineRequest;
use is_terminal::IsTerminal;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    airfare_deadline::logging::init();

    tracing::info!("{} v{}", airfare_deadline::APP_NAME, airfare_deadline::VERSION);

    // 加载配置并应用语言
    let state = AppState::from_default_config()?;

    let table = state.deadline_api.calculate(DeadlineRequest::default())?;

    // NO_COLOR 约定: 设置即关闭颜色
    let use_color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    println!("{}", t("app.title"));
    println!("{}", t("app.description"));
    println!();
    println!(
        "{}",
        t_with_args(
            "app.departure",
            &[("date", &table.departure_date.format("%Y-%m-%d").to_string())]
        )
    );
    println!();

    if table.is_empty() {
        println!("{}", t("app.no_plans"));
    } else {
        print!("{}", render_text_table(&table, use_color));
    }

    println!();
    print!("{}", render_notices());

    Ok(())
}
