mod comparison_filters;
mod request_flow;
