pub mod nav;
pub mod theme_select;
pub mod project_list;
pub mod pie_chart;
pub mod legend;
pub mod search_bar;
pub mod profile_stats;
