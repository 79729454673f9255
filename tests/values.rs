use std::collections::HashSet;

use chompcomb::{
    AndExt, BoxedExt, BoxedParser, ContextExt, MapExt, Parser, PositionExt, SequenceConfig, Token,
    Trailing, VariableConfig, debug_run, end, float, keyword, lazy, one_of, run, sequence, spaces,
    symbol, variable,
};

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Num(f64),
    Bool(bool),
    Name(String),
    List(Vec<Value>),
    Record(Vec<(String, Value)>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    List,
    Record,
    Field,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Expected {
    Symbol(&'static str),
    Keyword(&'static str),
    Number,
    InvalidNumber,
    Name,
    End,
}

type Grammar<T> = BoxedParser<Region, Expected, T>;

fn sym(text: &'static str) -> Grammar<()> {
    symbol(Token::new(text, Expected::Symbol(text))).boxed()
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn name() -> Grammar<String> {
    variable(VariableConfig {
        start: char::is_lowercase as fn(char) -> bool,
        inner: is_name_char as fn(char) -> bool,
        reserved: ["true", "false"].into_iter().map(String::from).collect::<HashSet<_>>(),
        expecting: Expected::Name,
    })
    .boxed()
}

fn boolean(text: &'static str, value: bool) -> Grammar<Value> {
    keyword(Token::new(text, Expected::Keyword(text)))
        .map(move |()| Value::Bool(value))
        .boxed()
}

fn value() -> Grammar<Value> {
    one_of(vec![
        float(Expected::Number, Expected::InvalidNumber).map(Value::Num).boxed(),
        boolean("true", true),
        boolean("false", false),
        name().map(Value::Name).boxed(),
        list(),
        record(),
    ])
    .boxed()
}

fn list() -> Grammar<Value> {
    sequence(SequenceConfig {
        start: Token::new("[", Expected::Symbol("[")),
        separator: Token::new(",", Expected::Symbol(",")),
        end: Token::new("]", Expected::Symbol("]")),
        spaces: spaces(),
        item: lazy(value),
        trailing: Trailing::Forbidden,
    })
    .map(Value::List)
    .in_context(Region::List)
    .boxed()
}

fn field() -> Grammar<(String, Value)> {
    name()
        .then_ignore(spaces())
        .then_ignore(sym("="))
        .then_ignore(spaces())
        .and(lazy(value))
        .in_context(Region::Field)
        .boxed()
}

fn record() -> Grammar<Value> {
    sequence(SequenceConfig {
        start: Token::new("{", Expected::Symbol("{")),
        separator: Token::new(",", Expected::Symbol(",")),
        end: Token::new("}", Expected::Symbol("}")),
        spaces: spaces(),
        item: field(),
        trailing: Trailing::Optional,
    })
    .map(Value::Record)
    .in_context(Region::Record)
    .boxed()
}

fn document() -> Grammar<Value> {
    spaces()
        .ignore_then(value())
        .then_ignore(spaces())
        .then_ignore(end(Expected::End))
        .boxed()
}

#[test]
fn test_nested_document() {
    let source = "{ xs = [1, 2.5, [true]],\n  owner = ada_l, }";
    let expected = Value::Record(vec![
        (
            "xs".to_string(),
            Value::List(vec![
                Value::Num(1.0),
                Value::Num(2.5),
                Value::List(vec![Value::Bool(true)]),
            ]),
        ),
        ("owner".to_string(), Value::Name("ada_l".to_string())),
    ]);
    assert_eq!(run(&document(), source), Ok(expected));
}

#[test]
fn test_failure_inside_nested_regions() {
    let dead_ends = run(&document(), "{ xs = [1, ? ] }").unwrap_err();

    // every alternative of a value was tried at the same spot
    assert_eq!(dead_ends.len(), 6);
    assert!(dead_ends.iter().all(|d| (d.row, d.col) == (1, 12)));
    assert!(dead_ends.iter().any(|d| d.problem == Expected::Number));
    assert!(dead_ends.iter().any(|d| d.problem == Expected::Symbol("{")));

    let stack: Vec<_> = dead_ends[0]
        .context_stack
        .iter()
        .map(|located| (located.context, located.col))
        .collect();
    assert_eq!(
        stack,
        vec![(Region::Record, 1), (Region::Field, 3), (Region::List, 8)]
    );
}

#[test]
fn test_trailing_input_is_rejected() {
    let dead_ends = run(&document(), "[1] 2").unwrap_err();
    assert_eq!(dead_ends.len(), 1);
    assert_eq!((dead_ends[0].col, &dead_ends[0].problem), (5, &Expected::End));
    assert!(dead_ends[0].context_stack.is_empty());
}

#[test]
fn test_reserved_names_are_keywords() {
    assert_eq!(run(&value(), "false"), Ok(Value::Bool(false)));
    assert_eq!(run(&value(), "falsey"), Ok(Value::Name("falsey".to_string())));
}

#[test]
fn test_trace_lists_finished_regions() {
    let (trace, result) = debug_run(&document(), "{ a = [x] }");
    assert!(result.is_ok());

    let consumed: Vec<_> = trace.iter().map(|entry| entry.consumed.as_str()).collect();
    assert_eq!(consumed, vec!["{ a = [x] }", "a = [x]", "[x]"]);

    let innermost: Vec<_> = trace[2].context.iter().map(|located| located.context).collect();
    assert_eq!(innermost, vec![Region::Record, Region::Field, Region::List]);
}

#[test]
fn test_deep_nesting() {
    let depth = 30;
    let source = format!("{}7{}", "[".repeat(depth), "]".repeat(depth));

    let mut expected = Value::Num(7.0);
    for _ in 0..depth {
        expected = Value::List(vec![expected]);
    }
    assert_eq!(run(&document(), &source), Ok(expected));
}

#[test]
fn test_spans_of_list_items() {
    let parser = sequence(SequenceConfig {
        start: Token::new("[", Expected::Symbol("[")),
        separator: Token::new(",", Expected::Symbol(",")),
        end: Token::new("]", Expected::Symbol("]")),
        spaces: spaces(),
        item: name().with_span(),
        trailing: Trailing::Forbidden,
    });

    let items = run(&parser, "[ab,\n  cd]").unwrap();
    let spans: Vec<_> = items
        .iter()
        .map(|(name, span)| (name.as_str(), span.start_row, span.start_col, span.len()))
        .collect();
    assert_eq!(spans, vec![("ab", 1, 2, 2), ("cd", 2, 3, 2)]);
}

#[test]
fn test_grammar_values_are_reusable() {
    let parser = document();
    let copy = parser.clone();
    assert!(parser.parse(chompcomb::State::new("true")).is_good());
    assert_eq!(run(&copy, "[]"), Ok(Value::List(vec![])));
}
