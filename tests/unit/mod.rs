mod test_animation_styles;
mod test_config_parser;
