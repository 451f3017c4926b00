// ==========================================
// 航空券割引締切日计算 - 应用层
// ==========================================
// 职责: 连接配置、API 与展示（终端表 / CSV）
// ==========================================

pub mod render;
pub mod state;

// 重导出
pub use render::{render_notices, render_text_table, write_csv};
pub use state::AppState;
