//! Misspellings found in the corpus texts and their fix.

pub(super) static MISSPELLINGS: &[(&str, &str)] = &[
    ("accademiz", "academia"),
    ("withreference", "with reference"),
    ("thememorial", "the memorial"),
    ("unreleated", "unrelated"),
    ("varation", "variation"),
    ("variatons", "variations"),
    ("youthclub", "youth club"),
    ("oprated", "operated"),
    ("originaly", "originally"),
    ("origintes", "originates"),
    ("poacea", "poaceae"),
    ("posgraduayed", "postgraduate"),
    ("prevously", "previously"),
    ("publshed", "published"),
    ("punlished", "published"),
    ("recor", "record"),
    ("relgiion", "religion"),
    ("runwiay", "runway"),
    ("sppoken", "spoken"),
    ("studiies", "studies"),
    ("sytle", "style"),
    ("tboh", "both"),
    ("whic", "which"),
    ("identfier", "identifier"),
    ("idenitifier", "identifier"),
    ("igredient", "ingredients"),
    ("ingridient", "ingredients"),
    ("inclusdes", "includes"),
    ("indain", "indian"),
    ("leaderr", "leader"),
    ("legue", "league"),
    ("lenght", "length"),
    ("loaction", "location"),
    ("locaated", "located"),
    ("locatedd", "located"),
    ("locationa", "location"),
    ("managerof", "manager of"),
    ("manhattern", "manhattan"),
    ("memberrs", "members"),
    ("menbers", "members"),
    ("meteres", "metres"),
    ("numbere", "number"),
    ("numberr", "number"),
    ("notablework", "notable work"),
    ("7and", "7 and"),
    ("abbreivated", "abbreviated"),
    ("abreviated", "abbreviated"),
    ("abreviation", "abbreviation"),
    ("addres", "address"),
    ("abbreviatedform", "abbreviated form"),
    ("aerbaijan", "azerbaijan"),
    ("azerbijan", "azerbaijan"),
    ("affilaited", "affiliated"),
    ("affliate", "affiliate"),
    ("aircfrafts", "aircraft"),
    ("aircrafts", "aircraft"),
    ("aircarft", "aircraft"),
    ("airpor", "airport"),
    ("in augurated", "inaugurated"),
    ("inagurated", "inaugurated"),
    ("inaugrated", "inaugurated"),
    ("ausitin", "austin"),
    ("coccer", "soccer"),
    ("comanded", "commanded"),
    ("constructionof", "construction of"),
    ("counrty", "country"),
    ("countyof", "county of"),
    ("creater", "creator"),
    ("currecncy", "currency"),
    ("denonym", "demonym"),
    ("discipine", "discipline"),
    ("engish", "english"),
    ("establishedin", "established in"),
    ("ethinic", "ethnic"),
    ("ethiopa", "ethiopia"),
    ("ethipoia", "ethiopia"),
    ("eceived", "received"),
    ("ffiliated", "affiliated"),
    ("fullname", "full name"),
    ("grop", "group"),
];
