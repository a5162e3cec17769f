//! Deterministic responders: answer template, model-facing data summary,
//! suggestion lists and chart series.

pub mod answer;
pub mod chart;
pub mod suggestions;
pub mod summary;

pub use answer::{NO_DATA_MESSAGE, template_answer};
pub use chart::{TimeSeries, build_chart_data, build_time_series};
pub use suggestions::{
    APOLOGY_SUGGESTIONS, DEFAULT_SUGGESTIONS, MAX_SUGGESTIONS, fallback_suggestions,
    parse_suggestion_lines,
};
pub use summary::data_summary;
