// tests/fake_backend.rs

use std::ffi::OsString;
use std::sync::{Arc, Mutex};

use nestlog::errors::NestlogError;
use nestlog::exec::ChildStatus;
use nestlog::run_with;
use nestlog_test_utils::builders::{ContextBuilder, EnvBuilder};
use nestlog_test_utils::fake_backend::{FakeProcessBackend, MemorySink};
use nestlog_test_utils::init_tracing;

#[test]
fn top_level_build_scenario() {
    init_tracing();

    let ctx = ContextBuilder::new()
        .cwd("/home/user/proj")
        .argv(&["make", "build", "-j4"])
        .build();
    let launched = Arc::new(Mutex::new(Vec::new()));
    let sink = MemorySink::new();

    let code = run_with(&ctx, FakeProcessBackend::exiting_with(launched.clone(), 0), sink.clone())
        .unwrap();
    assert_eq!(code, 0);

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert!(records[0].contains(" (0) start   : user/proj/  make build -j4\n"));
    assert!(records[1].contains(" (0) exit(0) : user/proj/  make build -j4\n"));
    assert!(sink.contents().ends_with("\n\n"));

    let plans = launched.lock().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].program, OsString::from("make"));
    assert_eq!(plans[0].argv0, OsString::from("make"));
    assert_eq!(plans[0].args, vec![OsString::from("build"), OsString::from("-j4")]);
}

#[test]
fn wrapped_command_override_and_relative_log_path() {
    init_tracing();

    let env = EnvBuilder::new()
        .wrapped_command("gmake")
        .log_path("out/build.log")
        .build();
    let ctx = ContextBuilder::new().env(env).cwd("/srv/ci/job").build();
    let launched = Arc::new(Mutex::new(Vec::new()));

    run_with(&ctx, FakeProcessBackend::exiting_with(launched.clone(), 0), MemorySink::new())
        .unwrap();

    let plans = launched.lock().unwrap();
    assert_eq!(plans[0].program, OsString::from("gmake"));
    assert!(plans[0].exports.contains(&(
        OsString::from("LOG_PATH"),
        OsString::from("/srv/ci/job/out/build.log")
    )));
    assert!(plans[0]
        .exports
        .contains(&(OsString::from("NEST_LEVEL"), OsString::from("1"))));
}

#[test]
fn each_generation_hands_the_next_level_down() {
    init_tracing();

    // Simulate the chain by feeding each generation's NEST_LEVEL export into
    // the next generation's environment.
    let mut env = EnvBuilder::new().build();
    let mut levels = Vec::new();

    for _ in 0..3 {
        let ctx = ContextBuilder::new().env(env.clone()).build();
        let launched = Arc::new(Mutex::new(Vec::new()));
        let sink = MemorySink::new();
        run_with(&ctx, FakeProcessBackend::exiting_with(launched.clone(), 0), sink.clone()).unwrap();

        levels.push(ctx.nesting_level());
        let start = &sink.records()[0];
        assert!(start.contains(&format!(" ({}) start", ctx.nesting_level())));

        let exports = launched.lock().unwrap()[0].exports.clone();
        env = exports.into_iter().collect();
    }

    assert_eq!(levels, vec![0, 1, 2]);
}

#[test]
fn signaled_child_is_reported_as_error() {
    init_tracing();

    let ctx = ContextBuilder::new().build();
    let backend = FakeProcessBackend::new(Arc::new(Mutex::new(Vec::new()))).then(
        ChildStatus::Signaled {
            signal: 9,
            name: "SIGKILL".into(),
        },
    );
    let sink = MemorySink::new();

    let err = run_with(&ctx, backend, sink.clone()).unwrap_err();
    assert!(matches!(err, NestlogError::Signaled { signal: 9, .. }));
    assert!(err.to_string().contains("signal 9"));
    assert_eq!(sink.records().len(), 1);
    assert!(!sink.contents().contains("exit("));
}

#[test]
fn missing_status_is_a_wait_failure() {
    init_tracing();

    let ctx = ContextBuilder::new().build();
    let backend = FakeProcessBackend::new(Arc::new(Mutex::new(Vec::new())));
    let sink = MemorySink::new();

    let err = run_with(&ctx, backend, sink.clone()).unwrap_err();
    assert!(matches!(err, NestlogError::Wait(_)));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(sink.records().len(), 1);
}

#[test]
fn unexecutable_tool_still_leaves_start_and_exit_records() {
    init_tracing();

    let ctx = ContextBuilder::new()
        .env(EnvBuilder::new().nest_level(1).build())
        .argv(&["make", "-C", "lib"])
        .build();
    let launched = Arc::new(Mutex::new(Vec::new()));
    let backend =
        FakeProcessBackend::new(launched.clone()).failing_spawn(std::io::ErrorKind::NotFound);
    let sink = MemorySink::new();

    assert_eq!(run_with(&ctx, backend, sink.clone()).unwrap(), 127);
    assert_eq!(launched.lock().unwrap().len(), 1);

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert!(records[0].contains(" (1) start   : user/proj/  make -C lib\n"));
    assert!(records[1].contains(" (1) exit(127) : user/proj/  make -C lib\n"));
    assert!(!sink.contents().ends_with("\n\n"));
}
