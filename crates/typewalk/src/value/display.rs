// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Cycle-safe textual rendering of values.
//!
//! A handle that is already being rendered further up the stack prints as an
//! elided placeholder (`[...]`, `(...)`, `{...}`, `Class(...)`).

use super::{Identity, Value};
use std::fmt::{self, Write};

struct Renderer<'f, 'a> {
    f: &'f mut fmt::Formatter<'a>,
    stack: Vec<Identity>,
}

impl Renderer<'_, '_> {
    fn render(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Null => self.f.write_str("null"),
            Value::Bool(v) => write!(self.f, "{}", v),
            Value::Int(v) => write!(self.f, "{}", v),
            Value::Float(v) => write!(self.f, "{:?}", v),
            Value::Str(v) => write!(self.f, "{:?}", v),
            Value::Bytes(v) => write!(self.f, "b\"{}\"", v.escape_ascii()),
            Value::Native(native) => write!(self.f, "<{}>", native.type_name()),
            Value::List(list) => {
                let id = list.identity();
                if self.stack.contains(&id) {
                    return self.f.write_str("[...]");
                }
                self.nested(id, |r| r.sequence("[", &list.items(), "]"))
            }
            Value::Tuple(tuple) => {
                let id = tuple.identity();
                if self.stack.contains(&id) {
                    return self.f.write_str("(...)");
                }
                self.nested(id, |r| {
                    if let [single] = tuple.items() {
                        r.f.write_char('(')?;
                        r.render(single)?;
                        r.f.write_str(",)")
                    } else {
                        r.sequence("(", tuple.items(), ")")
                    }
                })
            }
            Value::Set(set) => {
                let id = set.identity();
                if self.stack.contains(&id) {
                    return self.f.write_str("{...}");
                }
                let items = set.items();
                if items.is_empty() {
                    return self.f.write_str("set()");
                }
                self.nested(id, |r| r.sequence("{", &items, "}"))
            }
            Value::Map(map) => {
                let id = map.identity();
                if self.stack.contains(&id) {
                    return self.f.write_str("{...}");
                }
                self.nested(id, |r| {
                    r.f.write_char('{')?;
                    for (i, (key, val)) in map.entries().iter().enumerate() {
                        if i > 0 {
                            r.f.write_str(", ")?;
                        }
                        r.render(key)?;
                        r.f.write_str(": ")?;
                        r.render(val)?;
                    }
                    r.f.write_char('}')
                })
            }
            Value::Object(obj) => {
                let id = obj.identity();
                if self.stack.contains(&id) {
                    return write!(self.f, "{}(...)", obj.class_name());
                }
                self.nested(id, |r| {
                    write!(r.f, "{}(", obj.class_name())?;
                    for (i, (name, val)) in obj.attrs().iter().enumerate() {
                        if i > 0 {
                            r.f.write_str(", ")?;
                        }
                        write!(r.f, "{}=", name)?;
                        r.render(val)?;
                    }
                    r.f.write_char(')')
                })
            }
        }
    }

    fn nested(
        &mut self,
        id: Identity,
        body: impl FnOnce(&mut Self) -> fmt::Result,
    ) -> fmt::Result {
        self.stack.push(id);
        let result = body(self);
        self.stack.pop();
        result
    }

    fn sequence(&mut self, open: &str, items: &[Value], close: &str) -> fmt::Result {
        self.f.write_str(open)?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.f.write_str(", ")?;
            }
            self.render(item)?;
        }
        self.f.write_str(close)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer {
            f,
            stack: Vec::new(),
        }
        .render(self)
    }
}
