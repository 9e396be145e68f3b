use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

#[ctor::ctor]
fn init() {
    if log4rs::init_file("log4rs.yaml", Default::default()).is_ok() {
        return;
    }
    // no config file next to the binary, e.g. under the test runner
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .expect("Fallback logger configuration must be valid");
    let _ = log4rs::init_config(config);
}
