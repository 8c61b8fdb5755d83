mod phonefield_tests;
mod region_code;

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn init_logger() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}
