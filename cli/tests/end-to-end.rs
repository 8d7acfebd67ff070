/// End-to-end tests which run the `splitter`, `mapper` and `reducer` binaries against a local
/// object store rooted in a fresh temporary directory.
extern crate uuid;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use uuid::Uuid;

// This can't be a one-liner because cargo sometimes runs integration tests from
// `target/debug/deps`.
fn get_bin_path(name: &str) -> PathBuf {
    let mut path = env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push(name);
    path
}

struct TestStore {
    root: PathBuf,
}

impl TestStore {
    fn new() -> Self {
        let root = env::temp_dir().join(format!("wordcount-e2e-{}", Uuid::new_v4()));
        fs::create_dir_all(&root).unwrap();
        TestStore { root }
    }

    fn object_path(&self, bucket: &str, key: &str) -> PathBuf {
        self.root.join(bucket).join(key)
    }

    fn write(&self, bucket: &str, key: &str, content: &str) {
        let path = self.object_path(bucket, key);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn read(&self, bucket: &str, key: &str) -> String {
        fs::read_to_string(self.object_path(bucket, key)).unwrap()
    }

    fn run(&self, stage: &str, args: &[&str]) -> Output {
        self.run_with_log(stage, args, "info")
    }

    fn run_with_log(&self, stage: &str, args: &[&str], log_spec: &str) -> Output {
        Command::new(get_bin_path(stage))
            .arg("--store-root")
            .arg(&self.root)
            .args(args)
            .env("RUST_LOG", log_spec)
            .output()
            .unwrap()
    }
}

impl Drop for TestStore {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

#[test]
fn run_full_pipeline() {
    let store = TestStore::new();
    store.write(
        "corpus",
        "input.txt",
        "It was the best of times,\nit was the worst of times;\n\"It\" was (the) age of wisdom!\n",
    );

    let split = store.run("splitter", &["s3://corpus/input.txt", "s3://work/chunks/"]);
    assert!(split.status.success(), "{}", stderr_of(&split));
    assert_eq!(
        "It was the best of times,\nit was the worst of times;",
        store.read("work", "chunks/chunk1.txt")
    );
    assert_eq!(
        "\"It\" was (the) age of wisdom!",
        store.read("work", "chunks/chunk2.txt")
    );
    assert_eq!("", store.read("work", "chunks/chunk3.txt"));

    for i in 1..4 {
        let input = format!("s3://work/chunks/chunk{}.txt", i);
        let output = format!("s3://work/results/result{}.json", i);
        let map = store.run("mapper", &[&input, &output]);
        assert!(map.status.success(), "{}", stderr_of(&map));
    }
    assert_eq!("{}", store.read("work", "results/result3.json"));

    let reduce = store.run(
        "reducer",
        &[
            "s3://work/results/result1.json",
            "s3://work/results/result2.json",
            "s3://work/results/result3.json",
            "s3://work/final.json",
        ],
    );
    assert!(reduce.status.success(), "{}", stderr_of(&reduce));
    assert_eq!(
        r#"{"age":1,"best":1,"it":3,"of":3,"the":3,"times":2,"was":3,"wisdom":1,"worst":1}"#,
        store.read("work", "final.json")
    );
}

#[test]
fn run_splitter_with_chunk_count() {
    let store = TestStore::new();
    store.write("corpus", "input.txt", "The cat sat.\nThe Dog ran!");

    let split = store.run(
        "splitter",
        &["--chunks", "2", "s3://corpus/input.txt", "s3://corpus"],
    );

    assert!(split.status.success(), "{}", stderr_of(&split));
    assert_eq!("The cat sat.", store.read("corpus", "chunk1.txt"));
    assert_eq!("The Dog ran!", store.read("corpus", "chunk2.txt"));
    assert!(!exists(&store.object_path("corpus", "chunk3.txt")));
}

#[test]
fn run_splitter_missing_input() {
    let store = TestStore::new();

    let split = store.run("splitter", &["s3://corpus/missing.txt", "s3://corpus/chunks"]);

    assert_eq!(false, split.status.success());
    let stderr = stderr_of(&split);
    assert!(stderr.contains("Error downloading s3://corpus/missing.txt"), "{}", stderr);
    assert!(!exists(&store.object_path("corpus", "chunks")));
}

#[test]
fn run_splitter_missing_input_with_logging_off() {
    let store = TestStore::new();

    let split = store.run_with_log(
        "splitter",
        &["s3://corpus/missing.txt", "s3://corpus/chunks"],
        "off",
    );

    assert_eq!(false, split.status.success());
    let stderr = stderr_of(&split);
    assert!(stderr.contains("[ERROR]"), "{}", stderr);
    assert!(stderr.contains("Error downloading s3://corpus/missing.txt"), "{}", stderr);
    assert!(stderr.contains("caused by: Object not found: s3://corpus/missing.txt"), "{}", stderr);
    assert!(!stderr.contains("[INFO]"), "{}", stderr);
}

#[test]
fn run_splitter_zero_chunks() {
    let store = TestStore::new();
    store.write("corpus", "input.txt", "words");

    let split = store.run(
        "splitter",
        &["--chunks", "0", "s3://corpus/input.txt", "s3://corpus/chunks"],
    );

    assert_eq!(false, split.status.success());
    assert!(stderr_of(&split).contains("Invalid chunk count 0"));
}

#[test]
fn run_mapper_invalid_locator() {
    let store = TestStore::new();

    let map = store.run("mapper", &["corpus/chunk1.txt", "s3://corpus/result1.json"]);

    assert_eq!(false, map.status.success());
    assert!(stderr_of(&map).contains("Invalid object locator 'corpus/chunk1.txt'"));
}

#[test]
fn run_reducer_malformed_input() {
    let store = TestStore::new();
    store.write("work", "result1.json", r#"{"the":3}"#);
    store.write("work", "result2.json", "not json");

    let reduce = store.run(
        "reducer",
        &["s3://work/result1.json", "s3://work/result2.json", "s3://work/final.json"],
    );

    assert_eq!(false, reduce.status.success());
    assert!(stderr_of(&reduce).contains("Error parsing frequency table s3://work/result2.json"));
    assert!(!exists(&store.object_path("work", "final.json")));
}

#[test]
fn run_reducer_without_output() {
    let store = TestStore::new();

    let reduce = store.run("reducer", &["s3://work/result1.json"]);

    assert_eq!(false, reduce.status.success());
}
