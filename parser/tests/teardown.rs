use parser::{parse_program, Error};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

struct Counting;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE_BYTES.try_with(|n| n.set(n.get() + layout.size() as isize));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        let _ = LIVE_BYTES.try_with(|n| n.set(n.get() - layout.size() as isize));
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

/// Parses `text` and returns the error after checking that every byte
/// allocated along the way has been given back.
fn failing_parse(text: &str) -> Error {
    // first call on this thread sets up anything lazily kept for its lifetime
    let _ = parse_program(text);

    let before = live_bytes();
    let err = match parse_program(text) {
        Ok(program) => panic!("parsed: {:?}", program),
        Err(err) => err,
    };
    let kept = match &err {
        Error::LiteralRange { text } => text.capacity() as isize,
        _ => 0,
    };
    assert_eq!(live_bytes() - kept, before);
    err
}

#[test]
fn grammar_error_releases_partial_tree() {
    let err = failing_parse("func f() -> int { return 1 + ; }");
    assert_eq!(err, Error::Grammar { line: 1, column: 30 });

    // several declarations and statements are reduced before the error
    let text = "
        var a: int = 1;
        func g(x: float, y: bool) -> float {
            while (y) { print(x * 2.5); x = -x; }
            if (x < 1.0) { return g(x, false); }
            return x +
        }
    ";
    assert_eq!(failing_parse(text), Error::Grammar { line: 7, column: 9 });
}

#[test]
fn lexical_error_releases_tokens() {
    let err = failing_parse("func f() -> int { var s: int = 1; return s $ 2; }");
    assert_eq!(err, Error::Lexical { line: 1, column: 44 });
}

#[test]
fn literal_error_releases_tokens() {
    let err = failing_parse("var x: int = 3; var y: float = 1.5; var z: int = 99999999999999999999;");
    assert_eq!(
        err,
        Error::LiteralRange {
            text: "99999999999999999999".into()
        }
    );
}

#[test]
fn nesting_error_releases_tokens() {
    let text = format!("func f() -> int {{ return {}1; }}", "(".repeat(1000));
    assert!(matches!(failing_parse(&text), Error::Grammar { line: 1, .. }));
}

#[test]
fn parsed_tree_is_released() {
    let text = "func main() -> int { var i: int = 0; while (i < 3) { i = i + 1; } return i; }";
    let _ = parse_program(text);
    let before = live_bytes();
    let program = parse_program(text).unwrap();
    assert!(live_bytes() > before);
    drop(program);
    assert_eq!(live_bytes(), before);
}
