use jsonb_view_testkit::{array, boolean, int, node, null, object, tag, text};

use crate::jsonb::{ByteView, JsonbError, Number, TypeTag, Value};

#[test]
fn null_constant_matches_parsed_null() {
	let bytes = [0x00];
	let parsed = Value::parse(&bytes).expect("null parses");
	assert_eq!(parsed, Value::null());
	assert_eq!(Value::default(), Value::null());
	assert!(Value::null().payload().is_empty());
}

#[test]
fn payload_is_the_exact_sub_slice() {
	let bytes = [0x37, b'a', b'b', b'c', 0xff];
	let value = Value::parse(&bytes).expect("text parses");
	assert_eq!(value.tag(), TypeTag::Text);
	assert_eq!((value.payload().start(), value.payload().end()), (1, 4));
	assert!(std::ptr::eq(value.payload_bytes(), &bytes[1..4]));
}

#[test]
fn empty_array_has_no_elements() {
	let bytes = [0x0b];
	let value = Value::parse(&bytes).expect("array parses");
	assert!(value.as_array().expect("expands").is_empty());
}

#[test]
fn array_of_two_nulls() {
	let bytes = [0x2b, 0x00, 0x00];
	let value = Value::parse(&bytes).expect("array parses");
	let items = value.as_array().expect("expands");
	assert_eq!(items, vec![Value::null(), Value::null()]);
	assert_eq!(items[1].payload().start(), 3);
}

#[test]
fn array_elements_keep_order_and_account_for_every_byte() {
	let bytes = array(&[int(7), text("hello world, long"), boolean(false), array(&[null()])]);
	let value = Value::parse(&bytes).expect("array parses");
	let items = value.as_array().expect("expands");

	let tags: Vec<_> = items.iter().map(Value::tag).collect();
	assert_eq!(tags, [TypeTag::Int, TypeTag::Text, TypeTag::False, TypeTag::Array]);
	assert_eq!(items[1].as_text().expect("text decodes"), "hello world, long");
	assert_eq!(items.last().map(|item| item.payload().end()), Some(value.payload().end()));
}

#[test]
fn non_containers_expand_to_nothing() {
	let bytes = int(12);
	let value = Value::parse(&bytes).expect("int parses");
	assert!(value.as_array().expect("no error").is_empty());
	assert!(value.as_object().expect("no error").is_empty());

	let array_bytes = array(&[null()]);
	let array_value = Value::parse(&array_bytes).expect("array parses");
	assert!(array_value.as_object().expect("no error").is_empty());
}

#[test]
fn array_error_stops_iteration() {
	let mut bytes = array(&[null(), text("abc"), null()]);
	bytes[2] = 0x57;
	let value = Value::parse(&bytes).expect("array parses");

	let mut iter = value.iter_array();
	assert_eq!(iter.next(), Some(Ok(Value::null())));
	assert_eq!(iter.next(), Some(Err(JsonbError::InvalidHeader { at: 2 })));
	assert_eq!(iter.next(), None);

	assert_eq!(value.as_array(), Err(JsonbError::InvalidHeader { at: 2 }));
}

#[test]
fn object_entries_keep_insertion_order_with_last_write_wins() {
	let bytes = object(&[(text("b"), int(1)), (text("a"), int(2)), (text("b"), int(3))]);
	let value = Value::parse(&bytes).expect("object parses");
	let map = value.as_object().expect("expands");

	let keys: Vec<_> = map.keys().map(String::as_str).collect();
	assert_eq!(keys, ["b", "a"]);
	assert_eq!(map["b"].as_number().expect("int decodes"), Number::Int(3));
	assert_eq!(value.iter_object().count(), 3);
}

#[test]
fn object_key_without_value_is_invalid_header() {
	let mut payload = text("k");
	payload.extend(int(1));
	payload.extend(text("orphan"));
	let bytes = node(tag::OBJECT, &payload);
	let value = Value::parse(&bytes).expect("object parses");

	let err = value.as_object().expect_err("orphan key fails");
	assert_eq!(err, JsonbError::InvalidHeader { at: bytes.len() });
}

#[test]
fn object_lone_trailing_byte_is_ignored() {
	let mut payload = text("k");
	payload.extend(int(1));
	payload.push(0x00);
	let bytes = node(tag::OBJECT, &payload);
	let value = Value::parse(&bytes).expect("object parses");

	let map = value.as_object().expect("expands");
	assert_eq!(map.len(), 1);
}

#[test]
fn object_key_must_be_text() {
	let bytes = object(&[(int(5), null())]);
	let value = Value::parse(&bytes).expect("object parses");
	assert_eq!(value.as_object(), Err(JsonbError::NotText { tag: TypeTag::Int }));
	assert_eq!(value.iter_object().count(), 1);
}

#[test]
fn expansion_is_idempotent() {
	let bytes = object(&[(text("x"), array(&[int(1), int(2)])), (text("y"), null())]);
	let value = Value::parse(&bytes).expect("object parses");

	assert_eq!(value.as_object().expect("first"), value.as_object().expect("second"));
	let inner = value.get("x").expect("lookup").expect("present");
	assert_eq!(inner.as_array().expect("first"), inner.as_array().expect("second"));
}

#[test]
fn lookups_decode_lazily() {
	let bytes = object(&[(text("a"), int(1)), (text("a"), array(&[text("p"), text("q")]))]);
	let value = Value::parse(&bytes).expect("object parses");

	let list = value.get("a").expect("lookup").expect("present");
	assert!(list.is_array());
	assert_eq!(list.at(1).expect("index").map(|item| item.payload_bytes()), Some(&b"q"[..]));
	assert_eq!(list.at(2).expect("index"), None);
	assert_eq!(value.get("missing").expect("lookup"), None);
	assert_eq!(value.at(0).expect("not an array"), None);
}

#[test]
fn indexing_reports_errors_before_the_target() {
	let bytes = [0x3b, 0x00, 0x37, 0x00];
	let value = Value::parse(&bytes).expect("array parses");
	assert_eq!(value.at(0).expect("first element"), Some(Value::null()));
	assert_eq!(value.at(5), Err(JsonbError::InvalidHeader { at: 2 }));
}

#[test]
fn values_alias_one_buffer() {
	let bytes = array(&[text("left"), text("right")]);
	let root = Value::from_view(ByteView::new(&bytes)).expect("array parses");
	let items = root.as_array().expect("expands");
	for item in &items {
		assert!(std::ptr::eq(item.payload().backing(), bytes.as_slice()));
	}
	assert_eq!(Value::null().as_bool(), None);
	assert_eq!(Value::parse(&boolean(true)).expect("true parses").as_bool(), Some(true));
}
