//! End-to-end conversions through the public `InputTransformer` API, with
//! inputs modeled on real CP2K files.

use cp2k_xml::{AnnotationConfig, ConvertError, InputTransformer};

const SCHEMA: &str = r#"
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
           xmlns:libhpc="http://www.libhpc.imperial.ac.uk/SchemaAnnotation"
           targetNamespace="http://www.libhpc.imperial.ac.uk"
           elementFormDefault="qualified">
  <xs:element name="CP2K">
    <xs:complexType>
      <xs:sequence>
        <xs:element name="GLOBAL" minOccurs="0">
          <xs:complexType>
            <xs:sequence>
              <xs:element name="PROJECT" type="xs:string" minOccurs="0"/>
              <xs:element name="RUN_TYPE" type="xs:string" minOccurs="0"/>
              <xs:element name="PRINT_LEVEL" type="xs:string" minOccurs="0">
                <xs:annotation>
                  <xs:appinfo>
                    <libhpc:alias>IOLEVEL</libhpc:alias>
                  </xs:appinfo>
                </xs:annotation>
              </xs:element>
            </xs:sequence>
          </xs:complexType>
        </xs:element>
        <xs:element name="FORCE_EVAL" minOccurs="0">
          <xs:complexType>
            <xs:sequence>
              <xs:element name="METHOD" type="xs:string" minOccurs="0"/>
              <xs:element name="SUBSYS" minOccurs="0">
                <xs:complexType>
                  <xs:sequence>
                    <xs:element name="CELL" minOccurs="0">
                      <xs:complexType>
                        <xs:sequence>
                          <xs:element name="ABC" type="xs:string" minOccurs="0"/>
                        </xs:sequence>
                      </xs:complexType>
                    </xs:element>
                    <xs:element name="COORD" minOccurs="0">
                      <xs:complexType>
                        <xs:sequence/>
                      </xs:complexType>
                    </xs:element>
                  </xs:sequence>
                </xs:complexType>
              </xs:element>
            </xs:sequence>
          </xs:complexType>
        </xs:element>
      </xs:sequence>
    </xs:complexType>
  </xs:element>
</xs:schema>
"#;

const DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

fn transformer() -> InputTransformer {
    InputTransformer::for_schema_source(SCHEMA.to_string(), AnnotationConfig::default())
}

#[test]
fn simple_input() {
    let input = "\
&GLOBAL
  PROJECT methanol
  RUN_TYPE MD
&END GLOBAL
";
    let out = transformer().convert_str(input).unwrap();
    assert_eq!(
        out,
        format!(
            "{DECL}<CP2K><GLOBAL>\
             <PROJECT>methanol</PROJECT>\
             <RUN_TYPE>MD</RUN_TYPE>\
             </GLOBAL></CP2K>"
        )
    );
}

#[test]
fn nested_sections_with_units_and_coordinates() {
    let input = "\
&FORCE_EVAL
  METHOD Quickstep
  &SUBSYS
    &CELL
      ABC [angstrom] 12.42 12.42 12.42
    &END CELL
    &COORD
  O         0.000000    0.000000   -0.065587
  H         0.000000   -0.757136    0.520545
    &END COORD
  &END SUBSYS
&END FORCE_EVAL
";
    let out = transformer().convert_str(input).unwrap();
    assert_eq!(
        out,
        format!(
            "{DECL}<CP2K><FORCE_EVAL>\
             <METHOD>Quickstep</METHOD>\
             <SUBSYS><CELL>\
             <ABC UNIT=\"angstrom\">12.42 12.42 12.42</ABC>\
             </CELL><COORD>\
             <CP2K_KEYWORD_DEFAULT_KEYWORD>  O         0.000000    0.000000   -0.065587</CP2K_KEYWORD_DEFAULT_KEYWORD>\
             <CP2K_KEYWORD_DEFAULT_KEYWORD>  H         0.000000   -0.757136    0.520545</CP2K_KEYWORD_DEFAULT_KEYWORD>\
             </COORD></SUBSYS>\
             </FORCE_EVAL></CP2K>"
        )
    );
}

#[test]
fn alias_and_true_name_produce_the_same_element() {
    let t = transformer();
    let by_alias = t
        .convert_str("&GLOBAL\n  IOLEVEL MEDIUM\n&END GLOBAL\n")
        .unwrap();
    let by_true_name = t
        .convert_str("&GLOBAL\n  PRINT_LEVEL MEDIUM\n&END GLOBAL\n")
        .unwrap();
    assert_eq!(by_alias, by_true_name);
    assert!(by_alias.contains("<PRINT_LEVEL>MEDIUM</PRINT_LEVEL>"));
}

#[test]
fn end_without_section_name() {
    let input = "&GLOBAL\n  RUN_TYPE GEO_OPT\n&END\n";
    let out = transformer().convert_str(input).unwrap();
    assert_eq!(
        out,
        format!("{DECL}<CP2K><GLOBAL><RUN_TYPE>GEO_OPT</RUN_TYPE></GLOBAL></CP2K>")
    );
}

#[test]
fn comments_are_preserved_as_comment_nodes() {
    let input = "# produced by hand\n&GLOBAL\n&END\n";
    let out = transformer().convert_str(input).unwrap();
    assert_eq!(
        out,
        format!("{DECL}<CP2K><!--# produced by hand--><GLOBAL></GLOBAL></CP2K>")
    );
}

#[test]
fn repeated_conversions_are_identical() {
    let input = "&FORCE_EVAL\n  &SUBSYS\n    &CELL\n      ABC 5 5 5\n    &END\n  &END\n&END\n";
    let t = transformer();
    assert_eq!(t.convert_str(input).unwrap(), t.convert_str(input).unwrap());
}

#[test]
fn stream_and_string_inputs_agree() {
    let input = "&GLOBAL\n  PROJECT water\n&END\n";
    let t = transformer();
    let from_str = t.convert_str(input).unwrap();
    let from_reader = t
        .convert(std::io::BufReader::new(input.as_bytes()))
        .unwrap();
    assert_eq!(from_str, from_reader);
}

#[test]
fn schema_without_root_element_fails() {
    let schema = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
        <xs:element name="OTHER">
          <xs:complexType><xs:sequence/></xs:complexType>
        </xs:element>
      </xs:schema>"#;
    let t = InputTransformer::for_schema_source(schema.to_string(), AnnotationConfig::default());
    assert!(matches!(
        t.convert_str("&GLOBAL\n&END\n"),
        Err(ConvertError::Schema(_))
    ));
}

#[test]
fn malformed_schema_fails() {
    let t = InputTransformer::for_schema_source("<not-xml".to_string(), AnnotationConfig::default());
    assert!(matches!(
        t.convert_str(""),
        Err(ConvertError::Schema(_))
    ));
}
