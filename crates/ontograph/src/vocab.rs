//! URIs of the RDF, RDFS and OWL terms the converter reacts to.

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `rdfs:domain`
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
/// `rdfs:range`
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
/// `rdfs:Class`
pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";

/// `owl:Thing`, used when a property's domain or range is never declared.
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
/// `owl:Class`
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:ObjectProperty`
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:DatatypeProperty`
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
/// `owl:NamedIndividual`
pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
/// `owl:Restriction`
pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";

/// Types that mark their subject as a class.
pub const CLASS_TYPES: [&str; 2] = [OWL_CLASS, RDFS_CLASS];
