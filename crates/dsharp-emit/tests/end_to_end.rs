//! Both walks over one tree must agree on names, `static`/`const`
//! placement, arrays and initializers.

use dsharp_ast::report::Silent;
use dsharp_emit::{emit_header, emit_source, CodeGenerator, HeaderEmitter, SourceEmitter};
use dsharp_parse::parse_str;

#[test]
fn free_function_prototype_and_definition() {
    let tree = parse_str("fn add(a:int, b:int) : int { return a + b; }").expect("parse ok");
    let header = emit_header(&tree);
    let source = emit_source(&tree);
    assert!(header.contains("int32_t add(int32_t a, int32_t b);"), "got:\n{header}");
    assert!(
        source.contains("int32_t add(int32_t a, int32_t b)\n{\nreturn a + b;\n}\n"),
        "got:\n{source}"
    );
}

#[test]
fn field_spelling_matches_across_walks() {
    let tree = parse_str("static class Foo { var x:int; }").expect("parse ok");
    let header = emit_header(&tree);
    let source = emit_source(&tree);
    assert!(header.contains("static int32_t x;"));
    assert!(source.contains("int32_t Foo::x;"));
    assert!(!header.contains('='));
    assert!(!source.contains('='));
}

#[test]
fn static_constant_has_exactly_one_definition() {
    let tree = parse_str("static class Foo { const x:int = 5; }").expect("parse ok");
    assert!(emit_header(&tree).contains("static const int32_t x = 5;"));
    assert!(!emit_source(&tree).contains('x'));
}

#[test]
fn emitters_are_repeatable_and_leave_tree_intact() {
    let src = r#"
        region net {
            static class Socket {
                const backlog:int = 16;
                var open:int;
                fn listen(port:ushort) : bool {
                    if (port == 0) { return false; }
                    open += 1;
                    return true;
                }
            }
        }
    "#;
    let tree = parse_str(src).expect("parse ok");
    let snapshot = tree.clone();

    let mut header = HeaderEmitter::new(&Silent);
    let mut source = SourceEmitter::new(&Silent);
    let h1 = header.perform(&tree);
    let s1 = source.perform(&tree);
    assert_eq!(h1, header.perform(&tree));
    assert_eq!(s1, source.perform(&tree));
    assert_eq!(tree, snapshot);

    assert!(h1.contains("static bool listen(uint16_t port);"), "got:\n{h1}");
    assert!(s1.contains("bool Socket::listen(uint16_t port)"), "got:\n{s1}");
    assert!(s1.contains("int32_t Socket::open;"), "got:\n{s1}");
    assert!(!s1.contains("backlog"));
}

#[test]
fn walks_can_share_the_tree_across_threads() {
    let tree = parse_str("class A { fn f() : void { g(); } }").expect("parse ok");
    let (header, source) = std::thread::scope(|s| {
        let h = s.spawn(|| emit_header(&tree));
        let c = s.spawn(|| emit_source(&tree));
        (h.join().unwrap(), c.join().unwrap())
    });
    assert_eq!(header, emit_header(&tree));
    assert_eq!(source, emit_source(&tree));
}
