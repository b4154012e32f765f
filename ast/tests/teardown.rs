use ast::*;
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

struct Counting;

// per thread, so tests running in parallel don't disturb each other
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

fn int_ty() -> Type {
    Type::new(Primitive::Int)
}

// func fib(n: int) -> int {
//     if (n < 2) { return n; } else { return fib(n - 1) + fib(n - 2); }
// }
// const start: int = -3;
fn sample_program() -> Program {
    let cond = BinaryOp::new(Identifier::new("n"), BinOp::Lt, Literal::int(2));
    let then_block = Block::new(Some(vec![ReturnStmt::new(Identifier::new("n")).into()]));
    let call = |k| {
        FuncCall::new(
            "fib",
            vec![BinaryOp::new(Identifier::new("n"), BinOp::Sub, Literal::int(k)).into()],
        )
    };
    let sum = BinaryOp::new(call(1), BinOp::Add, call(2));
    let else_block = Block::new(Some(vec![ReturnStmt::new(sum).into()]));
    let body = Block::new(Some(vec![
        IfStmt::new(cond, then_block, Some(else_block)).into()
    ]));
    let fib = FuncDecl::new("fib", vec![Parameter::new("n", int_ty())], int_ty(), body);
    let start = VarDecl::new("start", int_ty(), UnaryOp::neg(Literal::int(3)), true);
    Program::new(vec![fib.into(), start.into()])
}

#[test]
fn dropping_root_releases_every_node() {
    let before = live_bytes();
    let program = sample_program();
    assert!(live_bytes() > before);
    // program, fib, param+type, ret type, body, if, cond(3), then(3),
    // else(2), sum, 2 x call(4), start+type+neg+literal
    assert_eq!(count_nodes(&program), 28);
    drop(program);
    assert_eq!(live_bytes(), before);
}

#[test]
fn abandoned_subtrees_are_released() {
    let before = live_bytes();
    {
        // pieces a parser had reduced before hitting an error; the root is
        // never built
        let cond = BinaryOp::new(Identifier::new("x"), BinOp::Geq, Literal::float(0.5));
        let stmts: Vec<CodeItem> = vec![
            PrintStmt::new(Identifier::new("x")).into(),
            AssignmentStmt::new("x", Literal::int(0)).into(),
        ];
        let params = vec![Parameter::new("x", Type::new(Primitive::Float))];
        let partial = WhileStmt::new(cond, Block::new(Some(stmts)));
        assert_eq!(count_nodes(&partial), 9);
        assert_eq!(params.len(), 1);
    }
    assert_eq!(live_bytes(), before);
}

#[test]
fn printing_does_not_retain_memory() {
    let program = sample_program();
    let before = live_bytes();
    let first = dump(&program);
    let second = dump(&program);
    assert_eq!(first, second);
    drop(first);
    drop(second);
    assert_eq!(live_bytes(), before);
}
