//! Generated by stringchain. Do not edit by hand.

#[allow(unused_imports)]
use stringchain::runtime::ChainNode;

/// Starting points for every chain in the grammar.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chains;

impl Chains {
    pub fn foo(&self) -> Foo {
        Foo { path_to_parent: Vec::new(), value: String::from("foo") }
    }

    pub fn goo(&self) -> Goo {
        Goo { path_to_parent: Vec::new(), value: String::from("goo") }
    }

    pub fn one(&self) -> One {
        One { path_to_parent: Vec::new(), value: String::from("one") }
    }
}

#[derive(Clone, Debug)]
pub struct Foo {
    path_to_parent: Vec<String>,
    value: String,
}

impl ChainNode for Foo {
    const IS_VARIABLE: bool = false;

    fn path_to_parent(&self) -> &[String] {
        &self.path_to_parent
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl Foo {
    pub fn bar(&self) -> Bar {
        Bar { path_to_parent: self.path(), value: String::from("bar") }
    }
}

#[derive(Clone, Debug)]
pub struct Goo {
    path_to_parent: Vec<String>,
    value: String,
}

impl ChainNode for Goo {
    const IS_VARIABLE: bool = false;

    fn path_to_parent(&self) -> &[String] {
        &self.path_to_parent
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl Goo {
    pub fn bar(&self) -> Bar {
        Bar { path_to_parent: self.path(), value: String::from("bar") }
    }

    pub fn one(&self) -> One {
        One { path_to_parent: self.path(), value: String::from("one") }
    }
}

#[derive(Clone, Debug)]
pub struct One {
    path_to_parent: Vec<String>,
    value: String,
}

impl ChainNode for One {
    const IS_VARIABLE: bool = false;

    fn path_to_parent(&self) -> &[String] {
        &self.path_to_parent
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl One {
    pub fn this(&self) -> This {
        This { path_to_parent: self.path(), value: String::from("this") }
    }

    pub fn two(&self) -> Two {
        Two { path_to_parent: self.path(), value: String::from("two") }
    }
}

#[derive(Clone, Debug)]
pub struct Bar {
    path_to_parent: Vec<String>,
    value: String,
}

impl ChainNode for Bar {
    const IS_VARIABLE: bool = false;

    fn path_to_parent(&self) -> &[String] {
        &self.path_to_parent
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl Bar {
    pub fn foo(&self) -> Foo {
        Foo { path_to_parent: self.path(), value: String::from("foo") }
    }

    pub fn goo(&self) -> Goo {
        Goo { path_to_parent: self.path(), value: String::from("goo") }
    }
}

#[derive(Clone, Debug)]
pub struct This {
    path_to_parent: Vec<String>,
    value: String,
}

impl ChainNode for This {
    const IS_VARIABLE: bool = false;

    fn path_to_parent(&self) -> &[String] {
        &self.path_to_parent
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl This {
    pub fn that(&self) -> That {
        That { path_to_parent: self.path(), value: String::from("that") }
    }
}

#[derive(Clone, Debug)]
pub struct Two {
    path_to_parent: Vec<String>,
    value: String,
}

impl ChainNode for Two {
    const IS_VARIABLE: bool = true;

    fn path_to_parent(&self) -> &[String] {
        &self.path_to_parent
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl Two {
    pub fn bar(&self) -> Bar {
        Bar { path_to_parent: self.path(), value: String::from("bar") }
    }
}

#[derive(Clone, Debug)]
pub struct That {
    path_to_parent: Vec<String>,
    value: String,
}

impl ChainNode for That {
    const IS_VARIABLE: bool = false;

    fn path_to_parent(&self) -> &[String] {
        &self.path_to_parent
    }

    fn value(&self) -> &str {
        &self.value
    }
}
