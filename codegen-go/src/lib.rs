use std::io;

use gostruct::{
    case::{camel_case, pascal_case, receiver},
    schema::{GoType, Schema},
};

mod config;

pub use config::{Config, ConfigError};

pub fn codegen(schema: Schema, config: &Config, out: &mut dyn io::Write) -> io::Result<()> {
    write(Go::new(schema, config), out)
}

struct Go {
    package: String,
    name: String,
    receiver: String,
    constructor: bool,
    fields: Vec<StructField>,
    methods: Vec<Method>,
}

struct StructField {
    original_name: String,
    var_name: String,
    type_name: GoType,
}

enum Method {
    Getter {
        method_name: String,
        var_name: String,
        type_name: GoType,
    },
    Setter {
        method_name: String,
        param_name: String,
        var_name: String,
        type_name: GoType,
    },
}

impl Go {
    fn new(schema: Schema, config: &Config) -> Self {
        let mut fields = Vec::with_capacity(schema.fields.len());
        let mut methods = vec![];

        for field in schema.fields {
            let var_name = match config.public_fields {
                true => pascal_case(&field.name),
                false => camel_case(&field.name),
            };

            if config.getters {
                methods.push(Method::Getter {
                    method_name: pascal_case(&field.name),
                    var_name: var_name.clone(),
                    type_name: field.ty,
                });
            }

            if config.setters {
                methods.push(Method::Setter {
                    method_name: format!("Set{}", pascal_case(&field.name)),
                    param_name: camel_case(&field.name),
                    var_name: var_name.clone(),
                    type_name: field.ty,
                });
            }

            fields.push(StructField {
                original_name: field.name,
                var_name,
                type_name: field.ty,
            });
        }

        Self {
            package: config.package.clone(),
            name: config.struct_name.clone(),
            receiver: receiver(&config.struct_name),
            constructor: config.constructor,
            fields,
            methods,
        }
    }
}

fn write(go: Go, out: &mut dyn io::Write) -> io::Result<()> {
    writeln!(out, "package {}", go.package)?;
    writeln!(out)?;

    writeln!(out, "type {} struct {{", go.name)?;
    for field in &go.fields {
        // the tag keeps decoding working after the key is renamed
        writeln!(
            out,
            "\t{} {} `json:\"{}\"`",
            field.var_name, field.type_name, field.original_name
        )?;
    }
    writeln!(out, "}}")?;

    if go.constructor {
        writeln!(out)?;
        writeln!(out, "func New{}() *{} {{", go.name, go.name)?;
        writeln!(out, "\treturn new({})", go.name)?;
        writeln!(out, "}}")?;
    }

    for method in go.methods {
        writeln!(out)?;
        match method {
            Method::Getter {
                method_name,
                var_name,
                type_name,
            } => {
                writeln!(
                    out,
                    "func ({} *{}) {}() {} {{",
                    go.receiver, go.name, method_name, type_name
                )?;
                writeln!(out, "\treturn {}.{}", go.receiver, var_name)?;
            }
            Method::Setter {
                method_name,
                param_name,
                var_name,
                type_name,
            } => {
                writeln!(
                    out,
                    "func ({} *{}) {}({} {}) {{",
                    go.receiver, go.name, method_name, param_name, type_name
                )?;
                writeln!(out, "\t{}.{} = {}", go.receiver, var_name, param_name)?;
            }
        }
        writeln!(out, "}}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    fn generate(json: Value, config: &Config) -> String {
        let schema = match json {
            Value::Object(obj) => Schema::from(obj),
            _ => panic!("not an object"),
        };
        let mut out = vec![];
        codegen(schema, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn defaults() {
        let output = generate(json!({"user_name": "bob"}), &Config::default());
        assert_eq!(
            "package main\n\
             \n\
             type Foo struct {\n\
             \tUserName string `json:\"user_name\"`\n\
             }\n\
             \n\
             func NewFoo() *Foo {\n\
             \treturn new(Foo)\n\
             }\n",
            output
        );
    }

    #[test]
    fn private_fields_with_getters() {
        let config = Config {
            public_fields: false,
            getters: true,
            ..Config::default()
        };
        let output = generate(json!({"age": 42}), &config);
        assert_eq!(
            "package main\n\
             \n\
             type Foo struct {\n\
             \tage int `json:\"age\"`\n\
             }\n\
             \n\
             func NewFoo() *Foo {\n\
             \treturn new(Foo)\n\
             }\n\
             \n\
             func (f *Foo) Age() int {\n\
             \treturn f.age\n\
             }\n",
            output
        );
        assert!(!output.contains("SetAge"));
    }

    #[test]
    fn float_field() {
        let output = generate(json!({"score": 3.14}), &Config::default());
        assert!(output.contains("\tScore float64 `json:\"score\"`\n"));
        assert!(!output.contains(" int "));
    }

    #[test]
    fn empty_object_emits_no_accessors() {
        let config = Config {
            getters: true,
            setters: true,
            ..Config::default()
        };
        let output = generate(json!({}), &config);
        assert_eq!(
            "package main\n\
             \n\
             type Foo struct {\n\
             }\n\
             \n\
             func NewFoo() *Foo {\n\
             \treturn new(Foo)\n\
             }\n",
            output
        );
    }

    #[test]
    fn without_constructor() {
        let config = Config {
            constructor: false,
            ..Config::default()
        };
        let output = generate(json!({"id": 1}), &config);
        assert_eq!(
            "package main\n\
             \n\
             type Foo struct {\n\
             \tId int `json:\"id\"`\n\
             }\n",
            output
        );
    }

    #[test]
    fn public_fields_with_getters_emits_both() {
        let config = Config {
            getters: true,
            ..Config::default()
        };
        let output = generate(json!({"age": 42}), &config);
        assert!(output.contains("\tAge int `json:\"age\"`\n"));
        assert!(output.contains("func (f *Foo) Age() int {\n\treturn f.Age\n}\n"));
    }

    #[test]
    fn getters_and_setters_interleave_per_field() {
        let config = Config {
            struct_name: "User".into(),
            package: "models".into(),
            public_fields: false,
            getters: true,
            setters: true,
            constructor: false,
        };
        let output = generate(json!({"first_name": "Ada", "age": 36}), &config);
        assert_eq!(
            "package models\n\
             \n\
             type User struct {\n\
             \tfirstName string `json:\"first_name\"`\n\
             \tage int `json:\"age\"`\n\
             }\n\
             \n\
             func (u *User) FirstName() string {\n\
             \treturn u.firstName\n\
             }\n\
             \n\
             func (u *User) SetFirstName(firstName string) {\n\
             \tu.firstName = firstName\n\
             }\n\
             \n\
             func (u *User) Age() int {\n\
             \treturn u.age\n\
             }\n\
             \n\
             func (u *User) SetAge(age int) {\n\
             \tu.age = age\n\
             }\n",
            output
        );
    }

    #[test]
    fn setter_uses_field_type() {
        let config = Config {
            setters: true,
            constructor: false,
            ..Config::default()
        };
        let output = generate(json!({"ratio": 0.25, "meta": {"a": 1}}), &config);
        assert!(output.contains("func (f *Foo) SetRatio(ratio float64) {\n\tf.Ratio = ratio\n}\n"));
        assert!(output.contains("func (f *Foo) SetMeta(meta interface{}) {\n\tf.Meta = meta\n}\n"));
    }

    #[test]
    fn setter_parameter_may_shadow_receiver() {
        let config = Config {
            setters: true,
            constructor: false,
            ..Config::default()
        };
        let output = generate(json!({"f": 1}), &config);
        assert!(output.contains("func (f *Foo) SetF(f int) {\n\tf.F = f\n}\n"));
    }

    #[test]
    fn colliding_keys_are_not_deduplicated() {
        let output = generate(json!({"user_id": 1, "user__id": 2}), &Config::default());
        assert!(output.contains("\tUserId int `json:\"user_id\"`\n"));
        assert!(output.contains("\tUserId int `json:\"user__id\"`\n"));
    }
}
