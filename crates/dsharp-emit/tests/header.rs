use dsharp_emit::emit_header;
use dsharp_parse::parse_str;

fn header(src: &str) -> String {
    emit_header(&parse_str(src).expect("parse ok"))
}

#[test]
fn instance_field_without_initializer() {
    assert_eq!(
        header("class Foo { var x:int; }"),
        "class Foo\n{\npublic:\n    int32_t x;\n};\n"
    );
}

#[test]
fn static_constant_field_is_fully_defined() {
    let out = header("static class Foo { const x:int = 5; }");
    assert_eq!(out, "class Foo\n{\npublic:\n    static const int32_t x = 5;\n};\n");
}

#[test]
fn static_mutable_field_is_declared_only() {
    let out = header("static class Counter { var hits:uint = 10; }");
    assert!(out.contains("    static uint32_t hits;\n"), "got:\n{out}");
    assert!(!out.contains("10"));
}

#[test]
fn instance_constant_keeps_initializer() {
    let out = header("class Limits { const max:short = 32; }");
    assert!(out.contains("    const int16_t max = 32;\n"), "got:\n{out}");
    assert!(!out.contains("static"));
}

#[test]
fn array_field_dimensions() {
    let out = header(
        "class Buf { var data:byte[64]; } static class Table { const lut:int[4] = { 1, 2, 3, 4 }; var scratch:int[8]; }",
    );
    assert!(out.contains("    uint8_t data[];\n"), "got:\n{out}");
    assert!(
        out.contains("    static const int32_t lut[4] = { 1 , 2 , 3 , 4 };\n"),
        "got:\n{out}"
    );
    assert!(out.contains("    static int32_t scratch[];\n"), "got:\n{out}");
}

#[test]
fn member_functions_are_prototypes() {
    let out = header(
        "class Stack { fn push(v:int) : void { top += 1; } fn peek() : @int { return data; } }",
    );
    assert!(out.contains("\n    void push(int32_t v);\n"), "got:\n{out}");
    assert!(out.contains("\n    int32_t* peek();\n"), "got:\n{out}");
    assert!(!out.contains("top"));
}

#[test]
fn static_class_functions_are_static() {
    let out = header("static class Math { fn abs(x:int) : int { return x; } }");
    assert!(out.contains("    static int32_t abs(int32_t x);\n"), "got:\n{out}");
}

#[test]
fn parameters_never_take_static() {
    let out = header("static class Io { fn write(const buf:@byte, len:ulong) : long { } }");
    assert!(
        out.contains("static int64_t write(const uint8_t* buf, uint64_t len);"),
        "got:\n{out}"
    );
}

#[test]
fn struct_has_no_access_label() {
    let out = header("struct Pair { var a:int; var b:Thing; }");
    assert_eq!(out, "struct Pair\n{\n    int32_t a;\n    Thing b;\n};\n");
}

#[test]
fn region_becomes_namespace() {
    let out = header("region geo { class Point { var x:double; } }");
    assert_eq!(
        out,
        "namespace geo\n{\n    class Point\n    {\n    public:\n        double x;\n    };\n}\n"
    );
}

// Unlike members, a mutable global is declared `extern` here and defined
// once in the source file (see `globals_are_defined_here_constants_are_not`
// in tests/source.rs).
#[test]
fn top_level_declarations() {
    let out = header("var ticks:ulong = 0; const name:@char = \"dsharp\"; var ring:int[16];");
    assert!(out.contains("extern uint64_t ticks;\n"), "got:\n{out}");
    assert!(out.contains("const int8_t* name = \"dsharp\";\n"), "got:\n{out}");
    assert!(out.contains("extern int32_t ring[];\n"), "got:\n{out}");
}

#[test]
fn nested_regions_indent_their_namespaces() {
    let out = header("region a { region b { class C { var x:int; } } }");
    assert_eq!(
        out,
        "namespace a\n{\n    namespace b\n    {\n        class C\n        {\n        public:\n            int32_t x;\n        };\n    }\n}\n"
    );
}

#[test]
fn imports_become_includes() {
    let out = header(r#"import "math.ds" import "gfx/mesh.ds""#);
    assert_eq!(out, "#include \"math.h\"\n#include \"gfx/mesh.h\"\n");
}

#[test]
fn statements_at_top_level_emit_nothing() {
    assert_eq!(header("x = 1; print(x);"), "");
}
