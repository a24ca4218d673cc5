mod test_completion_ranking;
mod test_display;
