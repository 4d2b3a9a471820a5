pub const APP_TITLE: &str = "LearnFromVideo";
pub const HERO_TITLE: &str = "Transform YouTube Videos Into Interactive Courses";
pub const DOMAIN_TIP: &str = "Just replace \"youtube.com\" with \"learnfromvideo.com\" in any URL!";
pub const INPUT_HINT: &str =
    "Paste a YouTube URL and press Enter (blank line submits the current URL; :example, :open N, :help, :quit)";

pub const COMMAND_EXAMPLE: &str = ":example";
pub const COMMAND_OPEN: &str = ":open";
pub const COMMAND_HELP: &str = ":help";
pub const COMMAND_QUIT: &str = ":quit";
